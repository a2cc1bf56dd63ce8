//! Shared fixtures

use chrono::NaiveDate;
use intraday_rth::fetch::{FetcherConfig, RetryPolicy};
use intraday_rth::session::{LocalTimeConverter, ZoneConverter};
use serde_json::{json, Value};
use std::time::Duration;

/// Fetcher config pointing at a mock server, with fast retries
pub fn fast_config(base_url: &str, max_attempts: u32) -> FetcherConfig {
    FetcherConfig::default()
        .base_url(base_url)
        .timeout(Duration::from_secs(2))
        .retry(RetryPolicy::new(max_attempts, Duration::from_millis(10)))
}

/// Epoch seconds for a New York wall-clock time
pub fn ny_epoch(date: NaiveDate, h: u32, m: u32) -> i64 {
    ZoneConverter::venue()
        .to_epoch(date.and_hms_opt(h, m, 0).unwrap())
        .unwrap()
}

/// One-minute chart document from `from` to `to` (inclusive, local time)
pub fn minute_chart(date: NaiveDate, from: (u32, u32), to: (u32, u32)) -> Value {
    let start = ny_epoch(date, from.0, from.1);
    let end = ny_epoch(date, to.0, to.1);
    let timestamps: Vec<i64> = (start..=end).step_by(60).collect();
    let n = timestamps.len();

    let price = |base: f64| -> Vec<f64> { (0..n).map(|i| base + i as f64 * 0.001).collect() };

    json!({
        "chart": {
            "result": [{
                "meta": {"symbol": "AAPL", "exchangeTimezoneName": "America/New_York"},
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{
                        "open": price(270.1234),
                        "high": price(270.5678),
                        "low": price(269.9876),
                        "close": price(270.3333),
                        "volume": (0..n).map(|i| 1000 + i as u64).collect::<Vec<_>>()
                    }]
                }
            }],
            "error": null
        }
    })
}

pub fn empty_chart() -> Value {
    json!({"chart": {"result": [], "error": null}})
}
