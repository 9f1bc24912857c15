//! Market data models
//!
//! Plain serializable payloads exchanged between the data source, the cache
//! and the benchmark driver.

pub mod order_book;

// Re-export commonly used types
pub use order_book::OrderBook;
