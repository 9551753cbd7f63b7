//! Word frequency counting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::text;

/// A word and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// Lowercased word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Return the `n` most frequent words in `text`.
///
/// Words are case-folded before counting. The result is ordered by
/// descending count; words with equal counts keep the order in which they
/// first appear. Its length is at most `n` and at most the number of
/// distinct words.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn top_words(text: &str, n: usize) -> Vec<WordCount> {
    let mut counts = count_words_in_order(&text::split_words_lowercase(text));
    // Stable sort: ties stay in first-occurrence order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// Count distinct words, in order of first occurrence.
fn count_words_in_order(words: &[String]) -> Vec<WordCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();

    for w in words {
        if let Some(&i) = index.get(w.as_str()) {
            counts[i].count += 1;
        } else {
            index.insert(w.as_str(), counts.len());
            counts.push(WordCount {
                word: w.clone(),
                count: 1,
            });
        }
    }

    counts
}
