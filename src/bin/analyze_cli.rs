//! One-shot command line analysis, bypassing the HTTP layer.
//!
//! Usage: analyze_cli "the review text" [model name]
//! Runs the same detect -> translate -> normalize -> vectorize -> predict
//! pipeline as the API and prints one label per classifier.

use anyhow::{bail, Result};
use dotenv::dotenv;

use review_sentiment_api::api::DISCLAIMER;
use review_sentiment_api::artifacts::ModelSet;
use review_sentiment_api::classifier::label_for;
use review_sentiment_api::language;
use review_sentiment_api::preprocess;
use review_sentiment_api::translate::Translator;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let mut args = std::env::args().skip(1);
    let review = match args.next() {
        Some(r) if !r.trim().is_empty() => r,
        _ => bail!("usage: analyze_cli \"the review text\" [model name]"),
    };
    let model_filter = args.next();

    let models = ModelSet::load(&ModelSet::dir_from_env())?;

    let lang = language::detect_language(&review);
    println!("🌍 Detected language: {}", lang);

    let english_review = if language::is_english(&lang) {
        review.clone()
    } else {
        let source = if lang == language::UNKNOWN_LANG { "auto" } else { lang.as_str() };
        match Translator::from_env().translate(&review, source, "en").await {
            Ok(translated) => {
                println!("🔁 Translated to English: {}", translated);
                translated
            }
            Err(e) => {
                eprintln!("⚠️ Translation failed ({}), analysing original text", e);
                review.clone()
            }
        }
    };

    let features = models.vectorizer.transform(&preprocess::normalize(&english_review));

    for (name, model) in models.iter() {
        if let Some(ref wanted) = model_filter {
            if name != wanted.as_str() {
                continue;
            }
        }
        let sentiment = model.predict(&features);
        let emoji = if sentiment == 1 { "😁" } else { "🥲" };
        println!("{:<24} {} {}", name, label_for(sentiment), emoji);
    }

    println!("{}", DISCLAIMER);
    Ok(())
}
