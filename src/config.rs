//! Configuration Module
//!
//! Resolves the networked cache target from environment variables.

use std::env;
use std::time::Duration;

/// Default Redis host when neither `REDIS_URL` nor `REDIS_HOST` is set.
pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1";

/// Default Redis port.
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Default upper bound on the construction-time liveness probe.
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 1000;

/// Cache connection parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full connection URL, takes precedence over host/port
    pub redis_url: Option<String>,
    /// Redis host used when no URL is given
    pub redis_host: String,
    /// Redis port used when no URL is given
    pub redis_port: u16,
    /// How long the liveness probe may take before falling back
    pub probe_timeout: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Full connection URL (default: unset)
    /// - `REDIS_HOST` - Redis host (default: 127.0.0.1)
    /// - `REDIS_PORT` - Redis port (default: 6379)
    /// - `REDIS_PROBE_TIMEOUT_MS` - Probe timeout in milliseconds (default: 1000)
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("REDIS_URL").ok().filter(|url| !url.is_empty()),
            redis_host: env::var("REDIS_HOST").unwrap_or_else(|_| DEFAULT_REDIS_HOST.to_string()),
            redis_port: env::var("REDIS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REDIS_PORT),
            probe_timeout: Duration::from_millis(
                env::var("REDIS_PROBE_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_PROBE_TIMEOUT_MS),
            ),
        }
    }

    /// Returns the URL the networked store should connect to.
    ///
    /// `redis_url` wins when present; otherwise it is built from host and port.
    pub fn connection_url(&self) -> String {
        match &self.redis_url {
            Some(url) => url.clone(),
            None => format!("redis://{}:{}/", self.redis_host, self.redis_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: None,
            redis_host: DEFAULT_REDIS_HOST.to_string(),
            redis_port: DEFAULT_REDIS_PORT,
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
        }
    }
}
