//! Writes the final counts, one `word<TAB>count` line per word.

use crate::error::WordCountError;
use crate::{ResultEntry, WordCountMap};
use anyhow::Result;
use itertools::Itertools;
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Orders the counts by word, comparing the UTF-8 bytes.
pub fn sorted_entries(counts: WordCountMap) -> Vec<ResultEntry> {
    counts
        .into_iter()
        .sorted_unstable_by(|a, b| a.0.cmp(&b.0))
        .map(|(word, count)| ResultEntry { word, count })
        .collect()
}

/// Writes `entries` to `writer` and flushes it.
pub fn report<W: Write>(entries: &[ResultEntry], writer: W) -> io::Result<()> {
    let mut out = BufWriter::new(writer);
    for entry in entries {
        writeln!(out, "{}", entry)?;
    }
    // An explicit flush surfaces errors that dropping the writer would swallow.
    out.flush()
}

/// Creates (or truncates) the file at `path` and writes `entries` to it.
///
/// The file is closed before returning, whether or not writing succeeded.
pub fn report_to_path(entries: &[ResultEntry], path: &Path) -> Result<()> {
    let to_error = |source| WordCountError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    report(entries, file).map_err(to_error)?;
    debug!("wrote {} lines to {}", entries.len(), path.display());
    Ok(())
}
