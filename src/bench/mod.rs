//! Benchmark Module
//!
//! Times order book fetches through an optional cache and summarizes the
//! latencies.

mod driver;
mod report;
mod summary;

pub use driver::{cache_key, fetch_order_book, run, BenchOptions, Sample};
pub use report::{format_sample, summary_table};
pub use summary::{median, quantile_exclusive, LatencySummary};
