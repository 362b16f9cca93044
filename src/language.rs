//! Language detection for incoming reviews.
//!
//! Thin wrapper over `whatlang`. Detection failure (empty text, too little
//! signal) maps to the sentinel code "unknown" rather than an error, so the
//! rest of the pipeline never has to branch on a detector fault.

use whatlang::{detect, Lang};

/// Sentinel returned when the detector cannot decide.
pub const UNKNOWN_LANG: &str = "unknown";

/// Detect the language of `text`, returning an ISO-639-1 code where one
/// exists ("en", "fr", ...) or the sentinel "unknown".
pub fn detect_language(text: &str) -> String {
    match detect(text) {
        Some(info) => iso639_1(info.lang()).to_string(),
        None => UNKNOWN_LANG.to_string(),
    }
}

/// True when the detected code means the text is already English.
pub fn is_english(code: &str) -> bool {
    code == "en"
}

// whatlang reports ISO-639-3; the API (and the translator) speak 639-1,
// so map the common cases and fall back to the 639-3 code for the rest.
fn iso639_1(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Spa => "es",
        Lang::Por => "pt",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        Lang::Vie => "vi",
        Lang::Ind => "id",
        other => other.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        let code = detect_language(
            "This movie was a wonderful surprise with a great cast and an ending I did not expect at all.",
        );
        assert_eq!(code, "en");
        assert!(is_english(&code));
    }

    #[test]
    fn test_detects_french() {
        let code = detect_language(
            "Ce film est magnifique, les acteurs sont excellents et la musique est superbe.",
        );
        assert_eq!(code, "fr");
        assert!(!is_english(&code));
    }

    #[test]
    fn test_empty_text_is_unknown() {
        assert_eq!(detect_language(""), UNKNOWN_LANG);
    }
}
