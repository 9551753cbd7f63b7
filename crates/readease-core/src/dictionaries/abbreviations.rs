//! Title abbreviations that do not end a sentence when followed by a period.
//!
//! Only honorifics and `St.`, which almost always precede a name. Everything
//! else (`etc.`, `ft.`, `Gen.`) ends a sentence like any other word.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations whose trailing period is not a sentence boundary.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["mr", "mrs", "ms", "dr", "st", "prof"]));

/// Check if a word is a known abbreviation (case-insensitive, no period).
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    ABBREVIATIONS.contains(word_lower.trim_matches('.'))
}
