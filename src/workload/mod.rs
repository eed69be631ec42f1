//! MapReduce applications the engine can run.
//!
//! # Example
//!
//! Mapping one chunk with the word count application:
//! ```
//! # use anyhow::Result;
//! use wordcount::workload::WORD_COUNT;
//! # fn main() -> Result<()> {
//! let counts = (WORD_COUNT.map_fn)("to be or not to be")?;
//! assert_eq!(counts["to"], 2);
//! let total = (WORD_COUNT.reduce_fn)(vec![counts.clone(), counts]);
//! assert_eq!(total["be"], 4);
//! # Ok(())
//! # }
//! ```

use crate::Workload;

pub mod wc;

/// The word count application.
pub const WORD_COUNT: Workload = Workload {
    map_fn: wc::map,
    reduce_fn: wc::reduce,
};
