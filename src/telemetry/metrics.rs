//! Prometheus metrics

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// A single provider HTTP attempt
    ProviderRequest,
}

impl LatencyMetric {
    fn name(self) -> &'static str {
        match self {
            LatencyMetric::ProviderRequest => "intraday_fetch_latency_ms",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let value_ms = duration.as_secs_f64() * 1000.0;
    metrics::histogram!(metric.name()).record(value_ms);
    tracing::trace!(metric = metric.name(), value_ms, "Recording latency");
}

/// Count a provider attempt; `failure` is the failure kind, `None` on success
pub fn record_attempt(failure: Option<&'static str>) {
    let outcome = failure.unwrap_or("success");
    metrics::counter!("intraday_fetch_attempts_total", "outcome" => outcome).increment(1);
}

/// Count bars handed back to callers
pub fn record_bars(count: usize) {
    metrics::counter!("intraday_bars_total").increment(count as u64);
}
