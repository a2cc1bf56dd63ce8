//! Pipeline error taxonomy

use crate::fetch::FetchExhausted;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the intraday pipeline.
///
/// Per-attempt failures never appear here directly; they are retried and, if
/// they persist, arrive wrapped in [`FetchExhausted`].
#[derive(Debug, Error)]
pub enum IntradayError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    FetchExhausted(#[from] FetchExhausted),

    #[error("malformed provider data: {0}")]
    MalformedProviderData(String),
}

impl IntradayError {
    /// HTTP status an HTTP layer should answer with
    pub fn status_code(&self) -> StatusCode {
        match self {
            IntradayError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            IntradayError::FetchExhausted(_) => StatusCode::SERVICE_UNAVAILABLE,
            IntradayError::MalformedProviderData(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
