//! Run settings: built-in defaults, overridden by an optional JSON file,
//! overridden by command-line flags.

use crate::error::WordCountError;
use crate::{utils, DEFAULT_CHUNK_SIZE, DEFAULT_OUTPUT};
use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Characters per chunk.
    pub chunk_size: usize,
    /// Where the report is written.
    pub output: PathBuf,
    /// Upper bound on mapper threads.
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            output: PathBuf::from(DEFAULT_OUTPUT),
            threads: utils::available_workers(),
        }
    }
}

impl Config {
    /// Loads a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file `{}`", path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file `{}`", path.display()))?;
        Ok(config)
    }

    /// Rejects values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(WordCountError::InvalidConfig("chunk size must be positive".into()).into());
        }
        if self.threads == 0 {
            return Err(WordCountError::InvalidConfig("thread count must be positive".into()).into());
        }
        if self.threads > utils::available_workers() {
            warn!(
                "{} threads requested but only {} processing units are available",
                self.threads,
                utils::available_workers()
            );
        }
        Ok(())
    }
}
