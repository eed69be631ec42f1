//! Failures that end a word count run.
//!
//! These are carried inside [`anyhow::Error`]; use `downcast_ref` to inspect
//! which stage failed.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordCountError {
    /// The input file is missing, unreadable or not valid UTF-8.
    #[error("failed to read input file `{}`", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A map task returned an error or panicked.
    #[error("map task for chunk {chunk} failed: {reason}")]
    ConcurrentTask { chunk: usize, reason: String },
    /// The output file could not be created, written or flushed.
    #[error("failed to write output file `{}`", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_failures_keep_their_cause() {
        let err = WordCountError::InputRead {
            path: PathBuf::from("in.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read input file `in.txt`");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("gone"));
    }

    #[test]
    fn task_failures_name_the_chunk() {
        let err = WordCountError::ConcurrentTask {
            chunk: 3,
            reason: "panicked: boom".into(),
        };
        assert_eq!(err.to_string(), "map task for chunk 3 failed: panicked: boom");
        assert!(err.source().is_none());
    }
}
