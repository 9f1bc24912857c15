//! Trade Monitor - order book latency benchmark
//!
//! Times repeated order book fetches with and without a cache in front of a
//! deliberately slow upstream.

use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trade_monitor::bench::{self, BenchOptions};
use trade_monitor::cli::Args;
use trade_monitor::exchange::MockExchange;
use trade_monitor::{Cache, Config};

/// Main entry point for the benchmark.
///
/// # Startup Sequence
/// 1. Load `.env` if present
/// 2. Initialize tracing subscriber for logging
/// 3. Parse CLI arguments and load cache configuration
/// 4. Select the cache backend (Redis or in-memory fallback)
/// 5. Run the fetch loop and print the latency summary
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the report
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trade_monitor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let mut cache = if args.cache_enabled() {
        info!("Selecting cache backend");
        Some(Cache::connect(&config).await)
    } else {
        None
    };
    let cache_label = cache
        .as_ref()
        .map(|c| c.backend().as_str())
        .unwrap_or("disabled");
    println!("Backend cache: {}", cache_label);

    let exchange = MockExchange::new(Duration::from_millis(args.latency_ms));
    info!(latency_ms = exchange.latency_ms(), "Mock exchange ready");

    let options = BenchOptions {
        symbol: args.symbol.clone(),
        iterations: args.iterations,
        ttl_seconds: args.ttl,
    };
    let summary = bench::run(&options, &exchange, cache.as_mut(), |i, sample| {
        println!("{}", bench::format_sample(i, options.iterations, sample));
    })
    .await?;

    println!("Latency Summary");
    println!("{}", bench::summary_table(&summary, cache_label));

    if let Some(cache) = &cache {
        let stats = cache.stats();
        info!(
            hits = stats.hits,
            misses = stats.misses,
            writes = stats.writes,
            hit_rate = stats.hit_rate(),
            "Cache statistics"
        );
    }

    Ok(())
}
