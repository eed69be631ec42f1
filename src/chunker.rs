//! Splits a document into fixed-size character chunks.
//!
//! Chunks ignore word boundaries: a word straddling a boundary is counted as
//! two separate tokens, one in each chunk.

use crate::error::WordCountError;
use anyhow::Result;
use itertools::Itertools;

/// Splits `text` into consecutive slices of `chunk_size` characters.
///
/// The last chunk holds whatever is left and may be shorter. Concatenating the
/// chunks in order gives back `text`. Empty text yields no chunks.
///
/// Returns an error if `chunk_size` is zero.
pub fn split(text: &str, chunk_size: usize) -> Result<Vec<&str>> {
    if chunk_size == 0 {
        return Err(WordCountError::InvalidConfig("chunk size must be positive".into()).into());
    }

    // Byte offsets of every chunk start, plus the end of the text.
    let bounds = text
        .char_indices()
        .step_by(chunk_size)
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect_vec();

    Ok(bounds
        .into_iter()
        .tuple_windows()
        .map(|(start, end)| &text[start..end])
        .collect())
}
