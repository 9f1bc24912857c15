//! Networked Store Module
//!
//! Redis-backed store. Redis owns expiry: values are written with `SETEX`
//! and a key past its TTL simply reads back as nil.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::debug;

use crate::cache::{Backend, Store, MAX_TTL_SECONDS};
use crate::error::{CacheError, Result};

// == Networked Store ==
/// Store backed by a single multiplexed Redis connection.
pub struct NetworkedStore {
    conn: MultiplexedConnection,
}

impl NetworkedStore {
    // == Connect ==
    /// Opens a connection to `url` and verifies it with a `PING`.
    ///
    /// Connecting and probing together must finish within `probe_timeout`.
    pub async fn connect(url: &str, probe_timeout: Duration) -> Result<Self> {
        let client = redis::Client::open(url)?;

        let handshake = async {
            let mut conn = client.get_multiplexed_async_connection().await?;
            let reply: String = redis::cmd("PING").query_async(&mut conn).await?;
            Ok::<_, CacheError>((conn, reply))
        };

        let (conn, reply) = tokio::time::timeout(probe_timeout, handshake)
            .await
            .map_err(|_| CacheError::ProbeTimeout(probe_timeout))??;

        if reply != "PONG" {
            return Err(CacheError::ProbeRejected(reply));
        }

        Ok(Self { conn })
    }
}

#[async_trait]
impl Store for NetworkedStore {
    fn backend(&self) -> Backend {
        Backend::Networked
    }

    async fn get(&mut self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = self.conn.get(key).await?;
        Ok(value)
    }

    async fn set(&mut self, key: &str, payload: String, ttl_seconds: i64) -> Result<()> {
        // Redis rejects EX 0; a non-positive TTL means the value is already gone
        if ttl_seconds <= 0 {
            debug!(key, ttl_seconds, "non-positive ttl, deleting instead of writing");
            return self.delete(key).await;
        }

        // Same ceiling as the local store; Redis refuses an out-of-range EX
        let ttl = ttl_seconds.unsigned_abs().min(MAX_TTL_SECONDS);
        let _: () = self.conn.set_ex(key, payload, ttl).await?;
        Ok(())
    }

    async fn delete(&mut self, key: &str) -> Result<()> {
        let _: () = self.conn.del(key).await?;
        Ok(())
    }
}
