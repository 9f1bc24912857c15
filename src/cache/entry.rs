//! Cache Entry Module
//!
//! Defines the structure for entries held by the local fallback store.

use std::time::Duration;

use tokio::time::Instant;

use crate::cache::MAX_TTL_SECONDS;

const MAX_TTL: Duration = Duration::from_secs(MAX_TTL_SECONDS);

// == Cache Entry ==
/// A serialized payload together with the instant it stops being visible.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Compact JSON text of the stored value
    pub payload: String,
    /// Absolute expiry; the entry is dead from this instant on
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry expiring `ttl_seconds` from now.
    ///
    /// A TTL of zero or less yields an entry that is already expired.
    pub fn new(payload: String, ttl_seconds: i64) -> Self {
        let now = Instant::now();
        let ttl = Duration::from_secs(u64::try_from(ttl_seconds).unwrap_or(0)).min(MAX_TTL);
        let expires_at = now + ttl;

        Self {
            payload,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its expiry, so a
    /// TTL that has fully elapsed never yields a hit.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns how long the entry stays visible, zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    /// Remaining TTL in milliseconds, saturating at `u64::MAX`.
    pub fn ttl_remaining_ms(&self) -> u64 {
        u64::try_from(self.ttl_remaining().as_millis()).unwrap_or(u64::MAX)
    }
}
