//! Fetch-through-cache loop.

use tokio::time::Instant;
use tracing::{debug, info};

use crate::bench::LatencySummary;
use crate::cache::Cache;
use crate::error::Result;
use crate::exchange::DataSource;
use crate::models::OrderBook;

/// Parameters of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchOptions {
    pub symbol: String,
    pub iterations: usize,
    /// TTL used when writing a fetched payload back into the cache
    pub ttl_seconds: i64,
}

/// Outcome of a single fetch.
#[derive(Debug, Clone)]
pub struct Sample {
    pub payload: OrderBook,
    /// Wall time around the whole lookup-or-fetch path
    pub latency_ms: f64,
    pub cache_hit: bool,
}

/// Cache key under which the order book for `symbol` is stored.
pub fn cache_key(symbol: &str) -> String {
    format!("orderbook:{}", symbol)
}

/// Fetches the order book for `symbol`, serving it from `cache` when possible.
///
/// On a miss the source is called and its answer written back with
/// `ttl_seconds`. The write-back is inside the timed section.
pub async fn fetch_order_book<S>(
    symbol: &str,
    source: &S,
    mut cache: Option<&mut Cache>,
    ttl_seconds: i64,
) -> Result<Sample>
where
    S: DataSource + ?Sized,
{
    let key = cache_key(symbol);
    let start = Instant::now();

    if let Some(cache) = cache.as_deref_mut() {
        if let Some(payload) = cache.get_json::<OrderBook>(&key).await? {
            return Ok(Sample {
                payload,
                latency_ms: elapsed_ms(start),
                cache_hit: true,
            });
        }
    }

    let payload = source.fetch(symbol).await;

    if let Some(cache) = cache {
        cache.set_json(&key, &payload, ttl_seconds).await?;
    }

    Ok(Sample {
        payload,
        latency_ms: elapsed_ms(start),
        cache_hit: false,
    })
}

/// Runs `options.iterations` fetches back to back and summarizes them.
///
/// `on_sample` is called after every fetch with the zero-based iteration
/// index, so callers can print progress as it happens.
pub async fn run<S, F>(
    options: &BenchOptions,
    source: &S,
    mut cache: Option<&mut Cache>,
    mut on_sample: F,
) -> Result<LatencySummary>
where
    S: DataSource + ?Sized,
    F: FnMut(usize, &Sample),
{
    info!(
        symbol = %options.symbol,
        iterations = options.iterations,
        ttl_seconds = options.ttl_seconds,
        "Starting benchmark"
    );

    let mut samples = Vec::with_capacity(options.iterations);
    for i in 0..options.iterations {
        let sample = fetch_order_book(
            &options.symbol,
            source,
            cache.as_deref_mut(),
            options.ttl_seconds,
        )
        .await?;

        debug!(iteration = i, latency_ms = sample.latency_ms, cache_hit = sample.cache_hit, "sample");
        on_sample(i, &sample);
        samples.push(sample);
    }

    Ok(LatencySummary::from_samples(&samples))
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
