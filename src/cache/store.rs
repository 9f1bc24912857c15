//! Store Trait Module
//!
//! The seam between [`Cache`](crate::cache::Cache) and its backends.

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;

/// Longest TTL any store honours; larger values are clamped to it.
pub const MAX_TTL_SECONDS: u64 = 100 * 365 * 24 * 60 * 60;

// == Backend ==
/// Which store a cache instance runs on. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Networked Redis server
    Networked,
    /// In-process map owned by the cache
    LocalFallback,
}

impl Backend {
    /// Short name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Networked => "redis",
            Backend::LocalFallback => "memory",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Store ==
/// Raw text key-value storage with per-key expiry.
///
/// Stores deal only in serialized payloads; JSON encoding happens in the
/// cache above them. A store is responsible for never returning an entry
/// after its TTL has elapsed.
#[async_trait]
pub trait Store: Send {
    /// The backend this store implements.
    fn backend(&self) -> Backend;

    /// Returns the payload under `key`, or `None` if absent or expired.
    async fn get(&mut self, key: &str) -> Result<Option<String>>;

    /// Stores `payload` under `key`, replacing any previous entry.
    ///
    /// `ttl_seconds <= 0` means the entry is expired immediately. TTLs above
    /// [`MAX_TTL_SECONDS`] are clamped to it.
    async fn set(&mut self, key: &str, payload: String, ttl_seconds: i64) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn delete(&mut self, key: &str) -> Result<()>;
}
