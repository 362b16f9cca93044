//! Loading of pre-fit model artifacts.
//!
//! Everything the pipeline needs at runtime (TF-IDF vocabulary/IDF weights
//! and the three classifier coefficient sets) is loaded once at startup into
//! an immutable `ModelSet` that gets passed into the API state. No lazy
//! globals: if an artifact is missing or inconsistent the process fails fast
//! with a readable error instead of 500-ing on the first request.

use crate::classifier::SentimentModel;
use crate::vectorizer::TfidfVectorizer;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Artifact filenames, fixed by the training pipeline.
const VECTORIZER_FILE: &str = "tfidf_vectorizer.json";
const MODEL_FILES: &[(&str, &str)] = &[
    ("Complement Naive Bayes", "cnb_model.json"),
    ("Logistic Regression", "lg_model.json"),
    ("SVM", "svm_model.json"),
];

/// Immutable handle set produced by startup loading.
#[derive(Debug, Clone)]
pub struct ModelSet {
    pub vectorizer: TfidfVectorizer,
    /// Name -> classifier, in a stable display order.
    models: Vec<(String, SentimentModel)>,
}

impl ModelSet {
    /// Resolve the artifact directory from `MODEL_DIR` (default `artifacts/`).
    pub fn dir_from_env() -> PathBuf {
        std::env::var("MODEL_DIR")
            .unwrap_or_else(|_| "artifacts".to_string())
            .into()
    }

    /// Load and validate every artifact under `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let vectorizer: TfidfVectorizer = read_json(&dir.join(VECTORIZER_FILE))?;
        vectorizer.validate()?;
        let n_features = vectorizer.n_features();

        let mut models = Vec::with_capacity(MODEL_FILES.len());
        for (name, file) in MODEL_FILES {
            let model: SentimentModel = read_json(&dir.join(file))?;
            model
                .validate(n_features)
                .with_context(|| format!("artifact {} is inconsistent", file))?;
            models.push((name.to_string(), model));
        }

        println!(
            "📦 Loaded {} classifiers over {} TF-IDF features from {}",
            models.len(),
            n_features,
            dir.display()
        );

        Ok(Self { vectorizer, models })
    }

    /// Names of the available classifiers, in display order.
    pub fn model_names(&self) -> Vec<String> {
        self.models.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Look up one classifier by its display name.
    pub fn get(&self, name: &str) -> Option<&SentimentModel> {
        self.models
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, model)| model)
    }

    /// Iterate over all classifiers in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SentimentModel)> {
        self.models.iter().map(|(n, m)| (n.as_str(), m))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read artifact {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse artifact {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_shipped_artifacts() {
        let set = ModelSet::load(Path::new("artifacts")).expect("shipped artifacts should load");
        assert_eq!(
            set.model_names(),
            vec!["Complement Naive Bayes", "Logistic Regression", "SVM"]
        );
        assert!(set.get("SVM").is_some());
        assert!(set.get("BERT").is_none());
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        let err = ModelSet::load(Path::new("no_such_dir")).unwrap_err();
        assert!(err.to_string().contains("tfidf_vectorizer.json"));
    }
}
