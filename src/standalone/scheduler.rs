//! Runs one map task per chunk on a bounded thread pool.

use crate::error::WordCountError;
use crate::{MapFn, WordCountMap};
use anyhow::{Context, Result};
use log::debug;
use rayon::prelude::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Maps every chunk with `map_fn` and returns the results in chunk order.
///
/// The pool has `min(chunks.len(), max_workers)` threads and lives only for
/// this call. Blocks until every task has finished. If any task fails or
/// panics, the whole call fails with [`WordCountError::ConcurrentTask`].
pub fn run_concurrently(
    chunks: &[&str],
    map_fn: MapFn,
    max_workers: usize,
) -> Result<Vec<WordCountMap>> {
    if chunks.is_empty() {
        return Ok(Vec::new());
    }

    let num_workers = chunks.len().min(max_workers.max(1));
    debug!("starting pool of {} workers for {} chunks", num_workers, chunks.len());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_workers)
        .thread_name(|i| format!("wc-mapper-{}", i))
        .build()
        .context("failed to start the mapper pool")?;

    // Indexed collection keeps results in chunk order. The pool is joined when
    // it is dropped at the end of this scope.
    pool.install(|| {
        chunks
            .par_iter()
            .enumerate()
            .map(|(chunk, text)| run_task(chunk, text, map_fn))
            .collect::<Result<Vec<_>>>()
    })
}

fn run_task(chunk: usize, text: &str, map_fn: MapFn) -> Result<WordCountMap> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| map_fn(text)));
    let reason = match outcome {
        Ok(Ok(counts)) => {
            debug!("chunk {} mapped to {} distinct words", chunk, counts.len());
            return Ok(counts);
        }
        Ok(Err(err)) => format!("{:#}", err),
        Err(payload) => panic_message(payload.as_ref()),
    };
    Err(WordCountError::ConcurrentTask { chunk, reason }.into())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {}", s)
    } else {
        "panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::wc;
    use std::thread;

    fn failing_map(chunk: &str) -> Result<WordCountMap> {
        if chunk.contains("bad") {
            anyhow::bail!("refusing to map `{}`", chunk);
        }
        wc::map(chunk)
    }

    fn panicking_map(chunk: &str) -> Result<WordCountMap> {
        if chunk.contains("boom") {
            panic!("mapper exploded");
        }
        wc::map(chunk)
    }

    fn thread_name_map(_chunk: &str) -> Result<WordCountMap> {
        let name = thread::current().name().unwrap_or("").to_string();
        Ok([(name, 1)].into_iter().collect())
    }

    #[test]
    fn results_keep_chunk_order() {
        let chunks: Vec<String> = (0..64).map(|i| format!("w{} ", i).repeat(i + 1)).collect();
        let chunks: Vec<&str> = chunks.iter().map(String::as_str).collect();
        let results = run_concurrently(&chunks, wc::map, 4).unwrap();
        assert_eq!(results.len(), 64);
        for (i, counts) in results.iter().enumerate() {
            assert_eq!(counts.len(), 1);
            assert_eq!(counts[&format!("w{}", i)], i as u64 + 1);
        }
    }

    #[test]
    fn no_chunks_no_results() {
        assert!(run_concurrently(&[], wc::map, 4).unwrap().is_empty());
    }

    #[test]
    fn pool_is_bounded() {
        let chunks = vec!["x"; 32];
        let results = run_concurrently(&chunks, thread_name_map, 2).unwrap();
        let names: std::collections::HashSet<_> =
            results.iter().flat_map(|m| m.keys().cloned()).collect();
        assert!(!names.is_empty() && names.len() <= 2, "{:?}", names);
        assert!(names.iter().all(|n| n.starts_with("wc-mapper-")));
    }

    #[test]
    fn pool_is_bounded_by_chunk_count() {
        let results = run_concurrently(&["only"], thread_name_map, 8).unwrap();
        let names = results.iter().flat_map(|m| m.keys()).collect::<Vec<_>>();
        assert_eq!(names, ["wc-mapper-0"]);
    }

    #[test]
    fn task_error_fails_the_run() {
        let err = run_concurrently(&["good", "bad", "good"], failing_map, 2).unwrap_err();
        match err.downcast_ref::<WordCountError>() {
            Some(WordCountError::ConcurrentTask { chunk, reason }) => {
                assert_eq!(*chunk, 1);
                assert!(reason.contains("refusing"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn task_panic_fails_the_run() {
        let err = run_concurrently(&["fine", "boom"], panicking_map, 2).unwrap_err();
        match err.downcast_ref::<WordCountError>() {
            Some(WordCountError::ConcurrentTask { chunk, reason }) => {
                assert_eq!(*chunk, 1);
                assert!(reason.contains("mapper exploded"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
