//! Pre-fit TF-IDF transform.
//!
//! The vectorizer is fit offline during training and shipped as a JSON
//! artifact (vocabulary + per-term IDF weights). This module only loads and
//! applies it; there is no `fit` here. Input text is expected to have gone
//! through `preprocess::normalize` already, so tokenization is a plain
//! whitespace split over exact vocabulary terms (including "not_" tags).

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term -> column index in the feature vector.
    vocabulary: HashMap<String, usize>,
    /// IDF weight per column, same length as the vocabulary.
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Check artifact consistency after deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.idf.len() != self.vocabulary.len() {
            bail!(
                "vectorizer artifact mismatch: {} terms but {} idf weights",
                self.vocabulary.len(),
                self.idf.len()
            );
        }
        for (term, &idx) in &self.vocabulary {
            if idx >= self.idf.len() {
                bail!("vectorizer term '{}' maps to out-of-range column {}", term, idx);
            }
        }
        Ok(())
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Map one normalized review into a dense TF-IDF vector:
    /// raw term counts, scaled per column by IDF, then L2-normalized
    /// (matching how the training-side transform was configured).
    /// Out-of-vocabulary tokens contribute nothing.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];

        for token in text.split_whitespace() {
            if let Some(&idx) = self.vocabulary.get(token) {
                vector[idx] += 1.0;
            }
        }

        for (idx, value) in vector.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in vector.iter_mut() {
                *value /= norm;
            }
        }

        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TfidfVectorizer {
        let vocabulary: HashMap<String, usize> = vec![
            ("good".to_string(), 0),
            ("not_good".to_string(), 1),
            ("movie".to_string(), 2),
        ]
        .into_iter()
        .collect();
        TfidfVectorizer {
            vocabulary,
            idf: vec![1.0, 2.0, 1.5],
        }
    }

    #[test]
    fn test_validate_accepts_consistent_artifact() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let mut v = sample();
        v.idf.pop();
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let v = sample();
        let features = v.transform("good movie");
        let norm: f32 = features.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_tagged_term_is_a_distinct_column() {
        let v = sample();
        let plain = v.transform("good");
        let tagged = v.transform("not_good");
        assert!(plain[0] > 0.0 && plain[1] == 0.0);
        assert!(tagged[0] == 0.0 && tagged[1] > 0.0);
    }

    #[test]
    fn test_out_of_vocabulary_is_zero_vector() {
        let v = sample();
        let features = v.transform("unseen tokens only");
        assert!(features.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_repeated_terms_accumulate_before_normalization() {
        let v = sample();
        // "movie movie good": movie tf=2, so movie should dominate.
        let features = v.transform("movie movie good");
        assert!(features[2] > features[0]);
    }
}
