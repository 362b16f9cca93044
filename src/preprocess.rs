//! Negation-aware review preprocessing.
//!
//! The pre-fit TF-IDF vocabulary was built over text run through this exact
//! transform, so the tagging scheme here must stay byte-for-byte stable:
//! a token following a negation cue gets a "not_" prefix and the cue itself
//! is dropped, making "not_good" a distinct vocabulary term from "good".

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Words that trigger tagging of the token that follows them.
static NEGATION_CUES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec!["not", "no", "never"].into_iter().collect()
});

/// Splits "n't" contractions: "isn't" -> "is not", "don't" -> "do not".
/// Word-bound on both sides so it never fires inside a longer word.
/// Deliberately literal: "won't" becomes "wo not", not "will not",
/// because the vocabulary was fit against the literal split.
static CONTRACTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\w+)n't\b").expect("invalid contraction regex")
});

/// Normalize a review for bag-of-words vectorization.
///
/// Steps, in order:
/// 1. Expand "n't" contractions into "<base> not".
/// 2. Split on whitespace. No punctuation stripping, no case folding.
/// 3. One left-to-right scan with a single pending-negation flag:
///    cues ("not"/"no"/"never", case-insensitive) are dropped and arm the
///    flag; the token after an armed flag is emitted as "not_<token>" with
///    its original casing. The cue check takes priority over the pending
///    flag, so "no no good" consumes the second "no" as a cue.
/// 4. Re-join with single spaces.
///
/// Total over all inputs: never fails, empty in -> empty out. The scope is
/// exactly one token wide ("not very good" -> "not_very good"); a trailing
/// cue is dropped with nothing to tag.
pub fn normalize(text: &str) -> String {
    let expanded = CONTRACTION_RE.replace_all(text, "$1 not");

    let mut output: Vec<String> = Vec::new();
    let mut pending_negation = false;

    for token in expanded.split_whitespace() {
        if NEGATION_CUES.contains(token.to_lowercase().as_str()) {
            pending_negation = true;
        } else if pending_negation {
            output.push(format!("not_{}", token));
            pending_negation = false;
        } else {
            output.push(token.to_string());
        }
    }

    output.join(" ")
}
