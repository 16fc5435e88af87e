//! Canonical text normalization.

use once_cell::sync::Lazy;
use regex::Regex;

// Everything that is neither a word character nor whitespace.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Strip punctuation and case-fold free text.
///
/// Non-word, non-whitespace characters are deleted outright (not replaced
/// with spaces), so "Sci-Fi!" becomes "scifi". The result contains only
/// lowercase word characters and the original whitespace. Pure and
/// idempotent; empty input yields empty output.
pub fn normalize(text: &str) -> String {
    NON_WORD.replace_all(text, "").to_lowercase()
}
