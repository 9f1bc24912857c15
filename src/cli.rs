//! Command-line arguments for the benchmark binary.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "trade_monitor")]
#[command(
    about = "Monitor/benchmark simulated trade latency with optional Redis cache",
    long_about = None
)]
pub struct Args {
    /// Trading pair symbol
    #[arg(long, default_value = "BTCUSDT")]
    pub symbol: String,

    /// Number of requests to send
    #[arg(long, default_value_t = 10)]
    pub iterations: usize,

    /// Enable cache (default)
    #[arg(long, overrides_with = "no_cache")]
    pub use_cache: bool,

    /// Disable cache
    #[arg(long, overrides_with = "use_cache")]
    pub no_cache: bool,

    /// Cache TTL seconds
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub ttl: i64,

    /// Simulated upstream latency in milliseconds
    #[arg(long, default_value_t = 800)]
    pub latency_ms: u64,
}

impl Args {
    /// Whether fetches should go through the cache. The last of
    /// `--use-cache` / `--no-cache` wins.
    pub fn cache_enabled(&self) -> bool {
        !self.no_cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["trade_monitor"]).unwrap();

        assert_eq!(args.symbol, "BTCUSDT");
        assert_eq!(args.iterations, 10);
        assert_eq!(args.ttl, 1);
        assert_eq!(args.latency_ms, 800);
        assert!(args.cache_enabled());
    }

    #[test]
    fn test_no_cache() {
        let args = Args::try_parse_from(["trade_monitor", "--no-cache"]).unwrap();
        assert!(!args.cache_enabled());
    }

    #[test]
    fn test_last_cache_flag_wins() {
        let args = Args::try_parse_from(["trade_monitor", "--no-cache", "--use-cache"]).unwrap();
        assert!(args.cache_enabled());

        let args = Args::try_parse_from(["trade_monitor", "--use-cache", "--no-cache"]).unwrap();
        assert!(!args.cache_enabled());
    }

    #[test]
    fn test_explicit_values() {
        let args = Args::try_parse_from([
            "trade_monitor",
            "--symbol",
            "ETHUSDT",
            "--iterations",
            "3",
            "--ttl",
            "-1",
            "--latency-ms",
            "5",
        ])
        .unwrap();

        assert_eq!(args.symbol, "ETHUSDT");
        assert_eq!(args.iterations, 3);
        assert_eq!(args.ttl, -1);
        assert_eq!(args.latency_ms, 5);
    }

    #[test]
    fn test_rejects_bad_iterations() {
        assert!(Args::try_parse_from(["trade_monitor", "--iterations", "many"]).is_err());
    }
}
