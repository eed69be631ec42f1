use crate::config::Config;
use anyhow::Result;
use clap::Parser;
use log::debug;
use std::path::PathBuf;

/// Count word frequencies in a text file using parallel map/reduce
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Text file to count words in
    pub input: PathBuf,

    /// File the sorted counts are written to [default: output.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Characters per chunk [default: 1000]
    #[arg(short, long)]
    pub chunk_size: Option<usize>,

    /// Maximum number of mapper threads [default: number of CPUs]
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// JSON file with default settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Builds the run settings, letting flags override the config file.
    pub fn to_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        config.validate()?;
        debug!("resolved config: {}", serde_json::to_string(&config)?);
        Ok(config)
    }
}
