//! A single-machine MapReduce word counter.
//!
//! The input document is split into fixed-size character chunks, each chunk is
//! mapped to a word-count table on a bounded thread pool, and the partial tables
//! are merged and written out sorted by word. The whole document and every
//! intermediate table are held in memory at once, which bounds the size of the
//! inputs this crate can handle.

use std::fmt;

pub mod chunker;
pub mod cmd;
pub mod config;
pub mod error;
pub mod standalone;
pub mod utils;
pub mod workload;

/// Characters per chunk when nothing else is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Output file written in the current directory when nothing else is configured.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/////////////////////////////////////////////////////////////////////////////
// MapReduce application types
/////////////////////////////////////////////////////////////////////////////

/// Mapping from a lower-cased word to its number of occurrences.
///
/// Words with zero occurrences are never inserted.
pub type WordCountMap = fnv::FnvHashMap<String, u64>;

/// A map function turns one chunk into its local word counts.
///
/// The [`anyhow::Result`] lets a map function abort the whole run.
pub type MapFn = fn(chunk: &str) -> anyhow::Result<WordCountMap>;

/// A reduce function merges the per-chunk tables, in chunk order, into one.
pub type ReduceFn = fn(results: Vec<WordCountMap>) -> WordCountMap;

/// A map reduce application.
#[derive(Copy, Clone)]
pub struct Workload {
    pub map_fn: MapFn,
    pub reduce_fn: ReduceFn,
}

/////////////////////////////////////////////////////////////////////////////
// Results
/////////////////////////////////////////////////////////////////////////////

/// A single word and its total count.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ResultEntry {
    /// The word.
    pub word: String,
    /// The total count.
    pub count: u64,
}

impl ResultEntry {
    /// Construct a new entry from the given word and count.
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Formats the entry as one line of the report, without the newline.
impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.word, self.count)
    }
}
