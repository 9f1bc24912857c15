//! Cache Module
//!
//! JSON cache with TTL that runs on Redis when reachable and on an
//! in-process map otherwise.

mod client;
mod entry;
mod local;
#[cfg(feature = "redis")]
mod networked;
mod stats;
mod store;


// Re-export public types
pub use client::Cache;
pub use entry::CacheEntry;
pub use local::LocalStore;
#[cfg(feature = "redis")]
pub use networked::NetworkedStore;
pub use stats::CacheStats;
pub use store::{Backend, Store, MAX_TTL_SECONDS};
