//! Resilient provider fetching
//!
//! Bounded, sequential retries with a fixed backoff around a JSON GET, plus
//! the chart-source seam the intraday pipeline fetches through.

mod client;
mod retry;
mod source;
mod types;

pub use client::JsonFetcher;
pub use retry::{with_retry, RetryPolicy};
pub use source::{ChartSource, ClientBuildError, YahooChartClient, YAHOO_CHART_URL};
pub use types::{FetchExhausted, FetcherConfig, TransientFailure, NONCE_PARAM};
