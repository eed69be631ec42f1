//! A MapReduce-compatible implementation of word count.
//!
//! Tokens are runs of non-whitespace, lower-cased. Punctuation is kept, so
//! `"sat."` and `"sat"` are different words.

use crate::WordCountMap;
use anyhow::Result;

pub fn map(chunk: &str) -> Result<WordCountMap> {
    let mut counts = WordCountMap::default();
    for word in chunk.split_whitespace() {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Sums the counts of every word across `results`, visiting them in order.
pub fn reduce(results: Vec<WordCountMap>) -> WordCountMap {
    let mut total = WordCountMap::default();
    for counts in results {
        for (word, count) in counts {
            *total.entry(word).or_insert(0) += count;
        }
    }
    total
}
