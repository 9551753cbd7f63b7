//! Heuristic syllable estimation.
//!
//! Counts groups of consecutive vowels (`a e i o u y`), then drops a silent
//! final `e`. Every word scores at least one syllable. This is an
//! approximation; no pronunciation dictionary is consulted.

use crate::dictionaries::silent_e::has_pronounced_final_e;
use crate::text;

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the number of syllables in a single word.
///
/// Case-insensitive. Returns 0 only for an empty string.
pub fn count_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();

    // Count vowel groups
    let mut syllables: usize = 0;
    let mut previous_was_vowel = false;
    for &c in &chars {
        let is_vowel = is_vowel(c);
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if syllables > 1 && has_silent_final_e(&word, &chars) {
        syllables -= 1;
    }

    syllables.max(1)
}

/// A final `e` is silent when it closes a consonant (`make`), except in
/// consonant + `le` endings (`table`) and known exceptions (`recipe`).
fn has_silent_final_e(word: &str, chars: &[char]) -> bool {
    let [.., before_e, 'e'] = chars else {
        return false;
    };
    if is_vowel(*before_e) {
        return false;
    }
    if *before_e == 'l' && chars.len() >= 3 && !is_vowel(chars[chars.len() - 3]) {
        return false;
    }
    !has_pronounced_final_e(word)
}

/// Sum syllables over every word in `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn count_text_syllables(text: &str) -> usize {
    text::split_words(text)
        .iter()
        .map(|w| count_syllables(w))
        .sum()
}
