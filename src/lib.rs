//! Movie review sentiment analysis service.
//!
//! The pipeline for one review: detect the language, translate to English if
//! needed, rewrite negated phrases so "not good" survives bag-of-words
//! vectorization as "not_good", apply the pre-fit TF-IDF transform, and run
//! the selected pre-trained classifiers. Exposed as a library so the HTTP
//! server and the one-shot CLI share the same code path.

pub mod api;
pub mod artifacts;
pub mod classifier;
pub mod language;
pub mod preprocess;
pub mod translate;
pub mod vectorizer;
