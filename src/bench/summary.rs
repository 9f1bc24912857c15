//! Latency aggregation.

use serde::Serialize;

use crate::bench::Sample;

/// Aggregate statistics for one benchmark run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatencySummary {
    pub iterations: usize,
    pub hits: usize,
    pub avg_ms: f64,
    pub p50_ms: f64,
    pub p95_ms: f64,
}

impl LatencySummary {
    /// Summarizes `samples`. An empty slice yields all zeros.
    pub fn from_samples(samples: &[Sample]) -> Self {
        let latencies: Vec<f64> = samples.iter().map(|s| s.latency_ms).collect();
        let hits = samples.iter().filter(|s| s.cache_hit).count();
        Self::from_latencies(&latencies, hits)
    }

    /// Summarizes raw latencies in milliseconds.
    ///
    /// p95 is the 19th of the 20-quantile cut points; with a single sample it
    /// falls back to the median.
    pub fn from_latencies(latencies_ms: &[f64], hits: usize) -> Self {
        if latencies_ms.is_empty() {
            return Self {
                hits,
                ..Self::default()
            };
        }

        let mut sorted = latencies_ms.to_vec();
        sorted.sort_by(f64::total_cmp);

        let p50_ms = median(&sorted);
        let p95_ms = quantile_exclusive(&sorted, 19, 20).unwrap_or(p50_ms);
        let avg_ms = sorted.iter().sum::<f64>() / sorted.len() as f64;

        Self {
            iterations: sorted.len(),
            hits,
            avg_ms,
            p50_ms,
            p95_ms,
        }
    }
}

/// Median of an ascending slice; 0.0 when empty.
pub fn median(sorted: &[f64]) -> f64 {
    let len = sorted.len();
    match len {
        0 => 0.0,
        _ if len % 2 == 1 => sorted[len / 2],
        _ => (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0,
    }
}

/// The `i`-th of `n - 1` cut points dividing an ascending slice into `n`
/// equal-probability groups, interpolated with the exclusive method
/// (positions `k * (len + 1) / n`).
///
/// Returns `None` with fewer than two data points or `i` outside `1..n`.
pub fn quantile_exclusive(sorted: &[f64], i: usize, n: usize) -> Option<f64> {
    let len = sorted.len();
    if len < 2 || i == 0 || i >= n {
        return None;
    }

    let m = len + 1;
    let j = (i * m / n).clamp(1, len - 1);
    // delta may exceed n when j was clamped down, which extrapolates past the top
    let delta = (i * m) as f64 - (j * n) as f64;
    let n = n as f64;

    Some((sorted[j - 1] * (n - delta) + sorted[j] * delta) / n)
}
