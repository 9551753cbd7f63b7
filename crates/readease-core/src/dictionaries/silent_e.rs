//! Words ending in `e` whose final `e` is pronounced.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words whose trailing `e` still forms its own syllable.
pub static PRONOUNCED_FINAL_E: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "recipe",
        "apostrophe",
        "catastrophe",
        "acne",
        "epitome",
        "karate",
        "sesame",
        "posse",
        "vigilante",
        "cliche",
        "fiance",
        "resume",
        "middle",
        "the",
    ])
});

/// Check if a lowercase word keeps its final `e` as a syllable.
pub fn has_pronounced_final_e(word: &str) -> bool {
    PRONOUNCED_FINAL_E.contains(word)
}
