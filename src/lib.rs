//! Trade Monitor - order book latency benchmark
//!
//! Fetches simulated market data through a JSON cache that uses Redis when
//! reachable and an in-process store otherwise.

pub mod bench;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod exchange;
pub mod models;

pub use cache::{Backend, Cache};
pub use config::Config;
pub use error::{CacheError, Result};
