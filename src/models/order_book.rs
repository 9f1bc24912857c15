//! Top-of-book snapshot for a trading pair.

use serde::{Deserialize, Serialize};

/// Best bid/ask for a symbol at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Trading pair, e.g. `BTCUSDT`
    pub symbol: String,
    pub best_bid: f64,
    pub best_ask: f64,
    /// Unix timestamp in milliseconds when the snapshot was taken
    pub ts: i64,
}
