//! Console rendering of benchmark progress and results.

use comfy_table::{presets::UTF8_FULL, Table};

use crate::bench::{LatencySummary, Sample};

/// One progress line, e.g. `[03/10] latency=0.1ms cache_hit=true payload.ts=1700000000000`.
pub fn format_sample(index: usize, iterations: usize, sample: &Sample) -> String {
    format!(
        "[{:02}/{}] latency={:.1}ms cache_hit={} payload.ts={}",
        index + 1,
        iterations,
        sample.latency_ms,
        sample.cache_hit,
        sample.payload.ts
    )
}

/// Two-column metric table. `cache_label` is the backend name or `disabled`.
pub fn summary_table(summary: &LatencySummary, cache_label: &str) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(["Metric", "Value"]);

    let rows = [
        ("iterations", summary.iterations.to_string()),
        ("cache", cache_label.to_string()),
        ("cache_hits", summary.hits.to_string()),
        ("avg_ms", format!("{:.1}", summary.avg_ms)),
        ("p50_ms", format!("{:.1}", summary.p50_ms)),
        ("p95_ms", format!("{:.1}", summary.p95_ms)),
    ];
    for (metric, value) in rows {
        table.add_row([metric.to_string(), value]);
    }

    table
}
