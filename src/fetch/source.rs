//! Chart data sources

use super::{FetchExhausted, FetcherConfig, JsonFetcher};
use crate::session::WindowSpec;
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use thiserror::Error;

/// Yahoo Finance v8 chart endpoint
pub const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Anything that can return the raw chart document for a symbol and window
#[async_trait]
pub trait ChartSource: Send + Sync {
    /// Fetch the provider's raw JSON for `symbol` over `window`
    async fn fetch_chart(&self, symbol: &str, window: &WindowSpec) -> Result<Value, FetchExhausted>;
}

/// Errors building a chart client
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid chart base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Yahoo Finance chart client
#[derive(Debug, Clone)]
pub struct YahooChartClient {
    fetcher: JsonFetcher,
    base_url: Url,
}

impl YahooChartClient {
    pub fn new(config: FetcherConfig) -> Result<Self, ClientBuildError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ClientBuildError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "URL cannot carry a path".into(),
            });
        }

        Ok(Self {
            fetcher: JsonFetcher::new(config)?,
            base_url,
        })
    }

    /// Endpoint for `symbol`, encoded as a single path segment
    fn chart_url(&self, symbol: &str) -> Url {
        let mut url = self.base_url.clone();
        // checked in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(symbol);
        }
        url
    }
}

#[async_trait]
impl ChartSource for YahooChartClient {
    async fn fetch_chart(&self, symbol: &str, window: &WindowSpec) -> Result<Value, FetchExhausted> {
        let url = self.chart_url(symbol);
        self.fetcher.fetch_json(&url, &window.query_params()).await
    }
}
