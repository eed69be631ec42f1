use anyhow::Result;
use log::info;
use std::time::Instant;

use super::{reporter, scheduler, Job, JobSummary};
use crate::*;

/// Runs `job` end to end with the given map/reduce application.
///
/// Nothing is written unless every map task succeeds. If writing the report
/// fails, a partial output file may be left behind.
pub fn run_job(job: &Job, engine: &Workload) -> Result<JobSummary> {
    let start = Instant::now();
    let config = &job.config;
    config.validate()?;

    let text = utils::read_document(&job.input)?;
    info!("read {} bytes from {}", text.len(), job.input.display());

    let chunks = chunker::split(&text, config.chunk_size)?;
    println!("Splitting input into {} chunks", chunks.len());

    // map phase
    let map_start = Instant::now();
    let results = scheduler::run_concurrently(&chunks, engine.map_fn, config.threads)?;
    info!("map phase finished in {:?}", map_start.elapsed());

    // reduce phase
    let counts = (engine.reduce_fn)(results);
    let total_words = counts.values().sum();
    let entries = reporter::sorted_entries(counts);

    reporter::report_to_path(&entries, &config.output)?;
    println!(
        "Word count completed. Results written to {}",
        config.output.display()
    );

    let summary = JobSummary {
        chunks: chunks.len(),
        distinct_words: entries.len(),
        total_words,
        output: config.output.clone(),
    };
    info!("{:?} in {:?}", summary, start.elapsed());
    Ok(summary)
}
