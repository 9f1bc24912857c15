//! Integration Tests for the Cache and Benchmark
//!
//! Exercises backend selection, TTL expiry and the fetch loop through the
//! public API.
//!
//! Tests marked `#[ignore]` need a live Redis at `REDIS_URL`:
//! `REDIS_URL=redis://127.0.0.1:6379/ cargo test -- --ignored`

use std::time::Duration;

use serde_json::{json, Value};
use trade_monitor::bench::{self, BenchOptions};
use trade_monitor::exchange::MockExchange;
use trade_monitor::{Backend, Cache, CacheError, Config};

// == Helper Functions ==

fn unreachable_config() -> Config {
    Config {
        redis_url: Some("redis://127.0.0.1:1/".to_string()),
        probe_timeout: Duration::from_millis(500),
        ..Config::default()
    }
}

fn live_config() -> Config {
    Config {
        redis_url: std::env::var("REDIS_URL").ok(),
        ..Config::default()
    }
}

fn order_book() -> Value {
    json!({"symbol": "BTCUSDT", "best_bid": 100.0, "best_ask": 100.1, "ts": 1234})
}

// == Backend Selection ==

#[tokio::test]
async fn test_unreachable_backend_falls_back() {
    let cache = Cache::connect(&unreachable_config()).await;
    assert_eq!(cache.backend(), Backend::LocalFallback);
    assert_eq!(cache.backend().as_str(), "memory");
}

#[tokio::test]
async fn test_invalid_url_falls_back() {
    let config = Config {
        redis_url: Some("definitely not a url".to_string()),
        ..Config::default()
    };

    let cache = Cache::connect(&config).await;
    assert_eq!(cache.backend(), Backend::LocalFallback);
}

#[tokio::test]
async fn test_unresolvable_host_falls_back() {
    let config = Config {
        redis_host: "host.invalid".to_string(),
        probe_timeout: Duration::from_millis(500),
        ..Config::default()
    };

    let cache = Cache::connect(&config).await;
    assert_eq!(cache.backend(), Backend::LocalFallback);
}

// == End-to-End Scenario ==

#[tokio::test]
async fn test_fallback_orderbook_expires() {
    let mut cache = Cache::connect(&unreachable_config()).await;
    assert_eq!(cache.backend(), Backend::LocalFallback);

    // Freeze the clock only after the probe has failed
    tokio::time::pause();

    cache
        .set_json("orderbook:BTCUSDT", &order_book(), 1)
        .await
        .unwrap();

    let immediate: Option<Value> = cache.get_json("orderbook:BTCUSDT").await.unwrap();
    assert_eq!(immediate, Some(order_book()));

    tokio::time::advance(Duration::from_secs(2)).await;

    let after: Option<Value> = cache.get_json("orderbook:BTCUSDT").await.unwrap();
    assert!(after.is_none());

    // Backend never changes after construction
    assert_eq!(cache.backend(), Backend::LocalFallback);
}

#[tokio::test]
async fn test_instances_do_not_share_fallback_store() {
    let mut first = Cache::connect(&unreachable_config()).await;
    let mut second = Cache::connect(&unreachable_config()).await;

    first.set_json("shared?", &json!(1), 60).await.unwrap();

    let seen: Option<Value> = second.get_json("shared?").await.unwrap();
    assert!(seen.is_none());
}

#[tokio::test]
async fn test_corrupt_entry_is_error_not_miss() {
    let mut cache = Cache::local();
    cache.set_json("orderbook:BTCUSDT", &json!("not a book"), 60).await.unwrap();

    let result = cache
        .get_json::<trade_monitor::models::OrderBook>("orderbook:BTCUSDT")
        .await;
    assert!(matches!(result, Err(CacheError::Deserialization { .. })));
}

// == Benchmark ==

#[tokio::test(start_paused = true)]
async fn test_benchmark_with_cache() {
    let exchange = MockExchange::new(Duration::from_millis(800));
    let mut cache = Cache::local();
    let options = BenchOptions {
        symbol: "BTCUSDT".to_string(),
        iterations: 10,
        ttl_seconds: 5,
    };

    let mut lines = Vec::new();
    let summary = bench::run(&options, &exchange, Some(&mut cache), |i, sample| {
        lines.push(bench::format_sample(i, options.iterations, sample));
    })
    .await
    .unwrap();

    assert_eq!(lines.len(), 10);
    assert!(lines[0].starts_with("[01/10] latency="));
    assert!(lines[0].contains("cache_hit=false"));
    assert!(lines[9].starts_with("[10/10]"));
    assert!(lines[9].contains("cache_hit=true"));

    assert_eq!(summary.iterations, 10);
    assert_eq!(summary.hits, 9);
    assert!(summary.avg_ms >= 80.0);
    assert!(summary.p50_ms < 800.0);
    assert!(summary.p95_ms >= 800.0 * 0.5);

    assert_eq!(cache.stats().hits, 9);
    assert_eq!(cache.stats().misses, 1);
    assert_eq!(cache.stats().writes, 1);
}

#[tokio::test(start_paused = true)]
async fn test_benchmark_without_cache() {
    let exchange = MockExchange::new(Duration::from_millis(100));
    let options = BenchOptions {
        symbol: "ETHUSDT".to_string(),
        iterations: 3,
        ttl_seconds: 1,
    };

    let summary = bench::run(&options, &exchange, None, |_, _| {})
        .await
        .unwrap();

    assert_eq!(summary.hits, 0);
    assert!(summary.p50_ms >= 100.0);

    let table = bench::summary_table(&summary, "disabled").to_string();
    assert!(table.contains("disabled"));
}

// == Live Redis ==

#[tokio::test]
#[ignore]
async fn test_redis_roundtrip_and_expiry() {
    let mut cache = Cache::connect(&live_config()).await;
    assert_eq!(cache.backend(), Backend::Networked);

    let key = format!("trade_monitor:test:{}", std::process::id());
    cache.set_json(&key, &order_book(), 1).await.unwrap();

    let immediate: Option<Value> = cache.get_json(&key).await.unwrap();
    assert_eq!(immediate, Some(order_book()));

    tokio::time::sleep(Duration::from_millis(2100)).await;
    let after: Option<Value> = cache.get_json(&key).await.unwrap();
    assert!(after.is_none());
}

#[tokio::test]
#[ignore]
async fn test_redis_zero_ttl_and_overwrite() {
    let mut cache = Cache::connect(&live_config()).await;
    assert_eq!(cache.backend(), Backend::Networked);

    let key = format!("trade_monitor:overwrite:{}", std::process::id());
    cache.set_json(&key, &json!({"v": 1}), 60).await.unwrap();
    cache.set_json(&key, &json!({"v": 2}), 60).await.unwrap();

    let value: Option<Value> = cache.get_json(&key).await.unwrap();
    assert_eq!(value, Some(json!({"v": 2})));

    cache.set_json(&key, &json!({"v": 3}), 0).await.unwrap();
    let value: Option<Value> = cache.get_json(&key).await.unwrap();
    assert!(value.is_none());
}
