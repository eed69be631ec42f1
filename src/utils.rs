//! Utility functions shared by the engine and the binary.
//!

use crate::error::WordCountError;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Read an entire input file into a [`String`].
///
/// Returns [`WordCountError::InputRead`] if the file cannot be opened or
/// does not contain valid UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        WordCountError::InputRead {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Number of processing units available to the pool.
#[inline]
pub fn available_workers() -> usize {
    num_cpus::get().max(1)
}
