//! Simulated exchange with a fixed response delay.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::exchange::DataSource;
use crate::models::OrderBook;

/// Default delay of a simulated upstream call.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Exchange stand-in that sleeps, then returns a fixed quote stamped with
/// the current time.
#[derive(Debug, Clone)]
pub struct MockExchange {
    latency: Duration,
}

impl MockExchange {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Latency in whole milliseconds, saturating at `u64::MAX`.
    pub fn latency_ms(&self) -> u64 {
        u64::try_from(self.latency.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for MockExchange {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl DataSource for MockExchange {
    async fn fetch(&self, symbol: &str) -> OrderBook {
        debug!(symbol, latency_ms = self.latency_ms(), "simulated upstream fetch");
        tokio::time::sleep(self.latency).await;

        OrderBook {
            symbol: symbol.to_string(),
            best_bid: 100.0,
            best_ask: 100.1,
            ts: chrono::Utc::now().timestamp_millis(),
        }
    }
}
