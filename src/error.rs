//! Error types for the cache layer
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache and benchmark operations.
///
/// An unreachable backend at construction time is not an error: the cache
/// degrades to the local store instead. The probe variants only travel
/// between the networked store and the factory that swallows them.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Value could not be encoded to its stored text form
    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored text is not valid for the requested type
    #[error("Corrupt payload for key '{key}': {source}")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Networked backend rejected a connection or command
    #[error("Backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Liveness probe did not answer in time
    #[error("Liveness probe timed out after {0:?}")]
    ProbeTimeout(Duration),

    /// Liveness probe answered with something other than PONG
    #[error("Unexpected probe reply: {0}")]
    ProbeRejected(String),
}

#[cfg(feature = "redis")]
impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::Backend(Box::new(err))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache layer.
pub type Result<T> = std::result::Result<T, CacheError>;
