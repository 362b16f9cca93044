//! HTTP API for the sentiment analyser.
//!
//! One submission flows through: language detection -> optional translation
//! to English -> negation normalization -> TF-IDF transform -> one prediction
//! per selected classifier.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::artifacts::ModelSet;
use crate::classifier::label_for;
use crate::language;
use crate::preprocess;
use crate::translate::Translator;

/// Rendered under every result, as in the original demo.
pub const DISCLAIMER: &str = "The application can make mistakes. Check before use.";

/// Shared application state, built once at startup.
pub struct AppState {
    pub models: ModelSet,
    pub translator: Translator,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// The movie review to analyse.
    pub review: String,
    /// Classifier names to run. Empty or omitted = run all of them.
    #[serde(default)]
    pub models: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelPrediction {
    /// Classifier display name.
    pub model: String,
    /// Raw binary label: 1 positive, 0 negative.
    pub sentiment: u8,
    /// "Positive" or "Negative".
    pub label: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Per-request id, useful for correlating logs.
    pub id: String,
    /// Detected language code, or "unknown".
    pub detected_language: String,
    /// English text the models actually saw, when translation happened.
    pub translated_text: Option<String>,
    pub predictions: Vec<ModelPrediction>,
    pub disclaimer: String,
    pub analyzed_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

/// Analyse one movie review.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Sentiment per selected classifier", body = AnalyzeResponse),
        (status = 400, description = "Blank review or unknown classifier name", body = ErrorResponse)
    ),
    tag = "sentiment"
)]
pub async fn analyze_review(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    if req.review.trim().is_empty() {
        return Err(bad_request(
            "Please enter a review before analysing or predicting.",
        ));
    }

    let selected = select_models(&state.models, &req.models).map_err(|e| bad_request(&e))?;

    let detected_language = language::detect_language(&req.review);

    // Translate anything that is not confidently English; the detector's
    // "unknown" becomes "auto" so the translation service re-detects. A
    // translator failure degrades to the original text, which still goes
    // through normalization like everything else.
    let (english_review, translated_text) = if language::is_english(&detected_language) {
        (req.review.clone(), None)
    } else {
        let source = if detected_language == language::UNKNOWN_LANG {
            "auto"
        } else {
            detected_language.as_str()
        };
        match state.translator.translate(&req.review, source, "en").await {
            Ok(translated) => (translated.clone(), Some(translated)),
            Err(e) => {
                eprintln!("⚠️ [Analyze] Translation failed, using original text: {}", e);
                (req.review.clone(), None)
            }
        }
    };

    let normalized = preprocess::normalize(&english_review);
    let features = state.models.vectorizer.transform(&normalized);

    let predictions: Vec<ModelPrediction> = selected
        .into_iter()
        .map(|(name, model)| {
            let sentiment = model.predict(&features);
            ModelPrediction {
                model: name.to_string(),
                sentiment,
                label: label_for(sentiment).to_string(),
            }
        })
        .collect();

    let id = uuid::Uuid::new_v4().to_string();
    println!(
        "🎬 [Analyze] {} lang={} models={} ",
        id,
        detected_language,
        predictions.len()
    );

    Ok(Json(AnalyzeResponse {
        id,
        detected_language,
        translated_text,
        predictions,
        disclaimer: DISCLAIMER.to_string(),
        analyzed_at: chrono::Utc::now(),
    }))
}

/// List the available classifiers.
#[utoipa::path(
    get,
    path = "/models",
    responses((status = 200, description = "Classifier names", body = ModelsResponse)),
    tag = "sentiment"
)]
pub async fn list_models(State(state): State<Arc<AppState>>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state.models.model_names(),
    })
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "sentiment"
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Resolve requested model names against the loaded set.
/// An empty request means "run everything".
fn select_models<'a>(
    set: &'a ModelSet,
    requested: &'a [String],
) -> Result<Vec<(&'a str, &'a crate::classifier::SentimentModel)>, String> {
    if requested.is_empty() {
        return Ok(set.iter().collect());
    }
    let mut selected = Vec::with_capacity(requested.len());
    for name in requested {
        match set.get(name) {
            Some(model) => selected.push((name.as_str(), model)),
            None => {
                return Err(format!(
                    "Unknown model '{}'. Available: {}",
                    name,
                    set.model_names().join(", ")
                ))
            }
        }
    }
    Ok(selected)
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            models: ModelSet::load(Path::new("artifacts")).unwrap(),
            translator: Translator::from_env(),
        })
    }

    #[test]
    fn test_select_models_empty_means_all() {
        let state = test_state();
        let all = select_models(&state.models, &[]).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_select_models_unknown_name() {
        let state = test_state();
        let err = select_models(&state.models, &["BERT".to_string()]).unwrap_err();
        assert!(err.contains("Unknown model 'BERT'"));
        assert!(err.contains("Logistic Regression"));
    }

    #[tokio::test]
    async fn test_blank_review_is_rejected() {
        let res = analyze_review(
            State(test_state()),
            Json(AnalyzeRequest {
                review: "   ".to_string(),
                models: vec![],
            }),
        )
        .await;
        let (status, body) = res.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.0.error.contains("enter a review"));
    }

    #[tokio::test]
    async fn test_english_review_end_to_end() {
        let res = analyze_review(
            State(test_state()),
            Json(AnalyzeRequest {
                review: "This movie was a wonderful surprise with a great cast and an \
                         excellent ending that I loved from start to finish."
                    .to_string(),
                models: vec!["Logistic Regression".to_string()],
            }),
        )
        .await
        .unwrap()
        .0;

        assert_eq!(res.detected_language, "en");
        assert!(res.translated_text.is_none());
        assert_eq!(res.predictions.len(), 1);
        assert_eq!(res.predictions[0].label, "Positive");
        assert_eq!(res.disclaimer, DISCLAIMER);
    }

    #[tokio::test]
    async fn test_negated_review_flips_to_negative() {
        let res = analyze_review(
            State(test_state()),
            Json(AnalyzeRequest {
                review: "Honestly this film is not good and the acting was not great either, \
                         a boring script that I would not recommend to anyone watching."
                    .to_string(),
                models: vec![],
            }),
        )
        .await
        .unwrap()
        .0;

        assert_eq!(res.detected_language, "en");
        assert_eq!(res.predictions.len(), 3);
        for p in &res.predictions {
            assert_eq!(p.label, "Negative", "model {} disagreed", p.model);
        }
    }
}
