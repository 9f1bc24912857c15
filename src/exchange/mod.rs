//! Exchange Module
//!
//! Upstream market data sources. The benchmark only needs something that
//! turns a symbol into an [`OrderBook`], however slowly.

mod mock;

use async_trait::async_trait;

use crate::models::OrderBook;

pub use mock::MockExchange;

/// A source of order book snapshots.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches the current top of book for `symbol`.
    async fn fetch(&self, symbol: &str) -> OrderBook;
}
