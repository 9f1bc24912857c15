//! Cache Client Module
//!
//! Backend-agnostic JSON cache. The backend is picked once in
//! [`Cache::connect`] and never changes for the lifetime of the instance.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use tracing::{debug, info, warn};

use crate::cache::{Backend, CacheStats, LocalStore, Store};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Cache ==
/// JSON get/set with TTL over whichever store answered at startup.
pub struct Cache {
    store: Box<dyn Store>,
    backend: Backend,
    stats: CacheStats,
}

impl Cache {
    // == Connect ==
    /// Builds a cache, preferring the networked backend described by `config`.
    ///
    /// Never fails: if the backend is compiled out, unreachable, or does not
    /// answer the liveness probe, the cache runs on a private local store.
    pub async fn connect(config: &Config) -> Self {
        #[cfg(feature = "redis")]
        {
            let url = config.connection_url();
            match crate::cache::NetworkedStore::connect(&url, config.probe_timeout).await {
                Ok(store) => {
                    info!("Connected to Redis cache backend");
                    return Self::with_store(Box::new(store));
                }
                Err(e) => {
                    warn!(error = %e, "Redis unavailable, using in-memory cache");
                }
            }
        }

        #[cfg(not(feature = "redis"))]
        {
            let _ = config;
            info!("Built without the redis feature, using in-memory cache");
        }

        Self::local()
    }

    // == Local ==
    /// Builds a cache that runs on the local fallback store.
    pub fn local() -> Self {
        Self::with_store(Box::new(LocalStore::new()))
    }

    /// Wraps an already-selected store.
    pub fn with_store(store: Box<dyn Store>) -> Self {
        let backend = store.backend();
        Self {
            store,
            backend,
            stats: CacheStats::new(),
        }
    }

    // == Backend ==
    /// The backend chosen at construction.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    // == Get JSON ==
    /// Reads and decodes the value under `key`.
    ///
    /// Returns `Ok(None)` for absent or expired keys. A stored payload that
    /// does not decode as `T` is an error, never a miss. Text that is not
    /// JSON at all is also evicted so the next read is a clean miss; valid
    /// JSON of another shape is left in place for readers of the right type.
    pub async fn get_json<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>> {
        let Some(payload) = self.store.get(key).await? else {
            self.stats.record_miss();
            return Ok(None);
        };

        match serde_json::from_str(&payload) {
            Ok(value) => {
                self.stats.record_hit();
                Ok(Some(value))
            }
            Err(source) => {
                if matches!(source.classify(), Category::Syntax | Category::Eof) {
                    warn!(key, error = %source, "evicting corrupt cache entry");
                    if let Err(e) = self.store.delete(key).await {
                        warn!(key, error = %e, "failed to evict corrupt cache entry");
                    }
                } else {
                    warn!(key, error = %source, "cached value does not match requested type");
                }
                Err(CacheError::Deserialization {
                    key: key.to_string(),
                    source,
                })
            }
        }
    }

    // == Set JSON ==
    /// Encodes `value` as compact JSON and stores it for `ttl_seconds`.
    ///
    /// Any previous entry under `key` is replaced, TTL included.
    /// `ttl_seconds <= 0` expires the entry immediately on every backend.
    pub async fn set_json<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
        ttl_seconds: i64,
    ) -> Result<()> {
        let payload = serde_json::to_string(value).map_err(|source| CacheError::Serialization {
            key: key.to_string(),
            source,
        })?;

        debug!(key, ttl_seconds, bytes = payload.len(), backend = %self.backend, "cache set");
        self.store.set(key, payload, ttl_seconds).await?;
        self.stats.record_write();
        Ok(())
    }

    // == Delete ==
    /// Removes `key` from the active backend.
    pub async fn delete(&mut self, key: &str) -> Result<()> {
        self.store.delete(key).await
    }
}
