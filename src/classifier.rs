//! Pre-trained binary sentiment classifiers.
//!
//! Three model families mirror what was fit offline against the same TF-IDF
//! features: logistic regression, a linear-kernel SVM, and complement naive
//! Bayes. Only the decision function lives here; coefficients arrive as JSON
//! artifacts next to the vectorizer.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Binary sentiment label. 1 = positive, 0 = negative.
pub const POSITIVE: u8 = 1;
pub const NEGATIVE: u8 = 0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SentimentModel {
    /// Sign of w.x + b, coefficients from a fitted logistic regression.
    LogisticRegression { weights: Vec<f32>, bias: f32 },
    /// Same decision rule, coefficients from a fitted linear SVM.
    LinearSvm { weights: Vec<f32>, bias: f32 },
    /// Argmax over per-class log scores.
    ComplementNaiveBayes {
        /// Per-feature log weights for the negative class.
        negative_weights: Vec<f32>,
        /// Per-feature log weights for the positive class.
        positive_weights: Vec<f32>,
        /// Log priors, [negative, positive].
        class_log_priors: [f32; 2],
    },
}

impl SentimentModel {
    /// Feature dimensionality this model was trained against.
    pub fn n_features(&self) -> usize {
        match self {
            SentimentModel::LogisticRegression { weights, .. } => weights.len(),
            SentimentModel::LinearSvm { weights, .. } => weights.len(),
            SentimentModel::ComplementNaiveBayes { positive_weights, .. } => {
                positive_weights.len()
            }
        }
    }

    /// Check artifact consistency against the vectorizer's width.
    pub fn validate(&self, expected_features: usize) -> Result<()> {
        if let SentimentModel::ComplementNaiveBayes {
            negative_weights,
            positive_weights,
            ..
        } = self
        {
            if negative_weights.len() != positive_weights.len() {
                bail!(
                    "naive bayes class weight lengths differ: {} vs {}",
                    negative_weights.len(),
                    positive_weights.len()
                );
            }
        }
        if self.n_features() != expected_features {
            bail!(
                "model expects {} features but vectorizer produces {}",
                self.n_features(),
                expected_features
            );
        }
        Ok(())
    }

    /// Predict the binary label for one feature vector.
    pub fn predict(&self, features: &[f32]) -> u8 {
        match self {
            SentimentModel::LogisticRegression { weights, bias }
            | SentimentModel::LinearSvm { weights, bias } => {
                if dot(weights, features) + bias > 0.0 {
                    POSITIVE
                } else {
                    NEGATIVE
                }
            }
            SentimentModel::ComplementNaiveBayes {
                negative_weights,
                positive_weights,
                class_log_priors,
            } => {
                let neg_score = class_log_priors[0] + dot(negative_weights, features);
                let pos_score = class_log_priors[1] + dot(positive_weights, features);
                if pos_score > neg_score {
                    POSITIVE
                } else {
                    NEGATIVE
                }
            }
        }
    }
}

fn dot(weights: &[f32], features: &[f32]) -> f32 {
    weights.iter().zip(features.iter()).map(|(w, x)| w * x).sum()
}

/// Human-readable label for a prediction.
pub fn label_for(prediction: u8) -> &'static str {
    if prediction == POSITIVE {
        "Positive"
    } else {
        "Negative"
    }
}
