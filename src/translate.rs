//! Translation client for non-English reviews.
//!
//! Calls an external LibreTranslate-compatible endpoint. The endpoint is a
//! collaborator, not something we own: any failure (connection refused, bad
//! status, malformed body) is reported upward and the caller falls back to
//! analyzing the untranslated text. Translation must never block the
//! preprocessing and prediction steps.

use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Default endpoint of a locally running LibreTranslate instance.
const DEFAULT_ENDPOINT: &str = "http://localhost:5000/translate";

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// HTTP translation client.
#[derive(Debug, Clone)]
pub struct Translator {
    client: reqwest::Client,
    endpoint: String,
}

impl Translator {
    /// Build a translator from the environment.
    /// `TRANSLATE_URL` overrides the default local endpoint.
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("TRANSLATE_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Translate `text` from `source` into `target`.
    /// Pass "auto" as `source` to let the service detect it (the detector's
    /// "unknown" sentinel is mapped to "auto" by the caller).
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let res = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({
                "q": text,
                "source": source,
                "target": target,
                "format": "text",
            }))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(anyhow!("translate request failed: {}", res.status()));
        }

        let body: TranslateResponse = res.json().await?;
        Ok(body.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_env_default() {
        // No env override in the test process -> default local endpoint.
        std::env::remove_var("TRANSLATE_URL");
        let t = Translator::from_env();
        assert_eq!(t.endpoint, DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(500))
            .build()
            .unwrap();
        let t = Translator {
            client,
            // Reserved TEST-NET address, nothing listens here.
            endpoint: "http://192.0.2.1:9/translate".to_string(),
        };
        let res = t.translate("bonjour", "fr", "en").await;
        assert!(res.is_err());
    }
}
