//! Fetcher configuration and error types

use super::RetryPolicy;
use super::YAHOO_CHART_URL;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Query parameter carrying the per-attempt cache-busting nonce
pub const NONCE_PARAM: &str = "_";

/// Immutable configuration for [`super::JsonFetcher`]
#[derive(Debug, Clone, PartialEq)]
pub struct FetcherConfig {
    /// Chart endpoint; the symbol is appended as a path segment
    pub base_url: String,
    /// Client-identifying User-Agent (some providers reject library defaults)
    pub user_agent: String,
    /// Hard per-attempt timeout
    pub timeout: Duration,
    /// Attempt count and spacing
    pub retry: RetryPolicy,
    /// JSON pointer to the collection that must be non-empty
    pub result_pointer: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: YAHOO_CHART_URL.to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
            result_pointer: "/chart/result".to_string(),
        }
    }
}

impl FetcherConfig {
    /// Override the endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the retry policy
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Override the per-attempt timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Failure of a single attempt. Recovered by the retry loop.
#[derive(Debug, Error)]
pub enum TransientFailure {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(StatusCode),

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response has no entries at {pointer}")]
    EmptyResult { pointer: String },
}

impl From<reqwest::Error> for TransientFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransientFailure::Timeout(e)
        } else {
            TransientFailure::Network(e)
        }
    }
}

impl TransientFailure {
    /// Short label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            TransientFailure::Network(_) => "network",
            TransientFailure::Timeout(_) => "timeout",
            TransientFailure::Status(_) => "status",
            TransientFailure::Decode(_) => "decode",
            TransientFailure::EmptyResult { .. } => "empty_result",
        }
    }
}

/// Every attempt failed. `last` is the final attempt's cause.
#[derive(Debug, Error)]
#[error("provider fetch failed after {attempts} attempt(s)")]
pub struct FetchExhausted {
    pub attempts: u32,
    #[source]
    pub last: TransientFailure,
}
