//! The local engine: chunk, map on a thread pool, reduce, report.

use crate::config::Config;
use std::path::PathBuf;

pub mod engine;
pub mod reporter;
pub mod scheduler;

#[derive(Debug, Clone)]
pub struct Job {
    pub input: PathBuf,
    pub config: Config,
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub chunks: usize,
    pub distinct_words: usize,
    pub total_words: u64,
    pub output: PathBuf,
}
