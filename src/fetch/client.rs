//! JSON GET with retries and cache defeat

use super::{with_retry, FetchExhausted, FetcherConfig, TransientFailure, NONCE_PARAM};
use crate::telemetry::{record_attempt, record_latency, LatencyMetric};
use chrono::Utc;
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use std::time::Instant;

/// HTTP client that only accepts JSON bodies with a non-empty result collection
#[derive(Debug, Clone)]
pub struct JsonFetcher {
    config: FetcherConfig,
    client: Client,
}

impl JsonFetcher {
    /// Build the underlying HTTP client from `config`
    pub fn new(config: FetcherConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// GET `url` with `params`, retrying per the configured policy.
    ///
    /// Every attempt carries a fresh nonce so intermediary caches cannot answer
    /// with a stale body. Either the full JSON document is returned or the
    /// last failure is wrapped in [`FetchExhausted`].
    pub async fn fetch_json(
        &self,
        url: &Url,
        params: &[(&str, String)],
    ) -> Result<Value, FetchExhausted> {
        let mut last_nonce = 0;

        with_retry(self.config.retry, |attempt| {
            let nonce = next_nonce(&mut last_nonce);
            let request = self
                .client
                .get(url.clone())
                .query(params)
                .query(&[(NONCE_PARAM, nonce)]);

            tracing::debug!(url = %url, attempt, nonce, "Requesting provider data");

            self.attempt(request)
        })
        .await
    }

    async fn attempt(&self, request: RequestBuilder) -> Result<Value, TransientFailure> {
        let started = Instant::now();
        let result = self.send(request).await;
        record_latency(LatencyMetric::ProviderRequest, started.elapsed());
        record_attempt(result.as_ref().err().map(TransientFailure::kind));
        result
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, TransientFailure> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransientFailure::Status(status));
        }

        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;

        if !has_entries(&value, &self.config.result_pointer) {
            return Err(TransientFailure::EmptyResult {
                pointer: self.config.result_pointer.clone(),
            });
        }

        Ok(value)
    }
}

/// Current epoch millis, bumped when the clock has not moved since the last call
fn next_nonce(last: &mut i64) -> i64 {
    let nonce = Utc::now().timestamp_millis().max(*last + 1);
    *last = nonce;
    nonce
}

/// Whether `pointer` resolves to a non-empty array or object
fn has_entries(value: &Value, pointer: &str) -> bool {
    match value.pointer(pointer) {
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
        _ => false,
    }
}
