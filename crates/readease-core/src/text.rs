//! Text tokenization.
//!
//! Splits raw text into words and sentences the way the readability formulas
//! expect them:
//!
//! - A word is a maximal run of alphabetic characters left after ASCII
//!   punctuation is stripped from a whitespace-separated token, so `don't`
//!   is one word (`dont`).
//! - A sentence ends at `.`, `!` or `?`. A run of terminators (`...`, `?!`)
//!   ends a single sentence, a segment with no words is not a sentence, and
//!   a period after a title abbreviation (`Dr.`, `Mrs.`) does not end one.
//!   Trailing text with no terminator is not counted as a sentence.

use crate::dictionaries::abbreviations::is_abbreviation;

/// Split text into words, preserving case and order of appearance.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().flat_map(words_in_token).collect()
}

/// Split text into lowercase words for case-insensitive counting.
pub fn split_words_lowercase(text: &str) -> Vec<String> {
    split_words(text)
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect()
}

/// Count words in text.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .map(|token| words_in_token(token).len())
        .sum()
}

/// Words contained in a single whitespace-separated token.
fn words_in_token(token: &str) -> Vec<String> {
    let stripped: String = token.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    stripped
        .split(|c: char| !c.is_alphabetic())
        .filter(|run| !run.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into sentences.
///
/// Each returned sentence keeps its terminating punctuation and is trimmed
/// of surrounding whitespace.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        if is_sentence_terminator(ch) && !(ch == '.' && follows_abbreviation(&chars, i)) {
            // Absorb the rest of a terminator run (`...`, `?!`).
            while i + 1 < chars.len() && is_sentence_terminator(chars[i + 1]) {
                i += 1;
                current.push(chars[i]);
            }
            let sentence = current.trim();
            if count_words(sentence) > 0 {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }

        i += 1;
    }

    if count_words(&current) > 0 {
        tracing::debug!(
            trailing_len = current.trim().len(),
            "ignoring text after the last sentence terminator"
        );
    }

    sentences
}

/// Count sentences in text.
pub fn count_sentences(text: &str) -> usize {
    split_sentences(text).len()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Whether the period at `pos` directly follows a title abbreviation.
fn follows_abbreviation(chars: &[char], pos: usize) -> bool {
    let start = chars[..pos]
        .iter()
        .rposition(|c| !c.is_alphabetic())
        .map_or(0, |p| p + 1);
    if start == pos {
        return false;
    }
    let word: String = chars[start..pos].iter().collect();
    is_abbreviation(&word)
}
