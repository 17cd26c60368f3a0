//! Stop words and word frequency ranking
//!
//! The stop-word set is built once and shared read-only by every analysis.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Common short English words excluded from frequency ranking
const STOP_WORD_LIST: [&str; 31] = [
    "the", "and", "in", "of", "on", "a", "an", "is", "it", "to", "for", "with",
    "at", "by", "from", "that", "this", "these", "those", "as", "be", "been",
    "are", "was", "were", "or", "but", "if", "then", "so", "because",
];

lazy_static! {
    /// Stop words available globally
    pub static ref STOP_WORDS: HashSet<&'static str> = STOP_WORD_LIST.iter().copied().collect();
}

/// Check if a word is a stop word (exact, case-sensitive match)
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Count word occurrences and rank them.
///
/// Empty words and stop words are skipped. Words are compared exactly as
/// given, so "The" and "the" are different keys.
///
/// # Arguments
///
/// * `words` - Words in scan order
///
/// # Returns
///
/// (word, count) pairs, most frequent first. Equal counts are ordered by word.
pub fn rank_words<'a, I>(words: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for word in words {
        if word.is_empty() || is_stop_word(word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    ranked
}
