//! Local Store Module
//!
//! In-process fallback used when no networked backend answers at startup.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::cache::{Backend, CacheEntry, Store};
use crate::error::Result;

// == Local Store ==
/// HashMap-backed store with lazy TTL eviction.
///
/// There is no background sweep: an expired entry stays in memory until the
/// next read of its key removes it.
#[derive(Debug, Default)]
pub struct LocalStore {
    entries: HashMap<String, CacheEntry>,
}

impl LocalStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Lookup ==
    /// Returns the live payload for `key`.
    ///
    /// Expired entries are removed on the spot and reported as absent.
    pub fn lookup(&mut self, key: &str) -> Option<&str> {
        let expired = self.entries.get(key)?.is_expired();
        if expired {
            self.entries.remove(key);
            debug!(key, "evicted expired local entry");
            return None;
        }

        let entry = self.entries.get(key)?;
        debug!(
            key,
            ttl_remaining_ms = entry.ttl_remaining_ms(),
            "local cache hit"
        );
        Some(entry.payload.as_str())
    }

    // == Insert ==
    /// Stores `payload` under `key`, overwriting any prior entry.
    pub fn insert(&mut self, key: String, payload: String, ttl_seconds: i64) {
        self.entries.insert(key, CacheEntry::new(payload, ttl_seconds));
    }

    // == Remove ==
    /// Removes `key`, returning whether an entry (live or expired) was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Length ==
    /// Number of entries held, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Store for LocalStore {
    fn backend(&self) -> Backend {
        Backend::LocalFallback
    }

    async fn get(&mut self, key: &str) -> Result<Option<String>> {
        Ok(self.lookup(key).map(str::to_owned))
    }

    async fn set(&mut self, key: &str, payload: String, ttl_seconds: i64) -> Result<()> {
        self.insert(key.to_string(), payload, ttl_seconds);
        Ok(())
    }

    async fn delete(&mut self, key: &str) -> Result<()> {
        self.remove(key);
        Ok(())
    }
}
