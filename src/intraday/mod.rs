//! Intraday pipeline
//!
//! Ties the pieces together for one request: resolve the query window,
//! fetch the provider document, then filter and normalize it into bars.

mod error;
mod types;

pub use error::IntradayError;
pub use types::IntradayResponse;

use crate::fetch::{ChartSource, ClientBuildError, FetcherConfig, YahooChartClient};
use crate::quote::{normalize, ChartPayload};
use crate::session::{resolve_window, SessionWindow, ZoneConverter};
use crate::telemetry::record_bars;
use tracing::Instrument;
use uuid::Uuid;

/// Stateless intraday bar service over a [`ChartSource`]
pub struct IntradayService<S> {
    source: S,
    converter: ZoneConverter,
    session: SessionWindow,
}

impl IntradayService<YahooChartClient> {
    /// Service backed by the Yahoo chart API
    pub fn yahoo(config: FetcherConfig) -> Result<Self, ClientBuildError> {
        Ok(Self::new(YahooChartClient::new(config)?))
    }
}

impl<S: ChartSource> IntradayService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            converter: ZoneConverter::venue(),
            session: SessionWindow::RTH,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch RTH one-minute bars for `symbol`.
    ///
    /// `date` is `YYYY-MM-DD` in New York time; without it the provider's most
    /// recent trading day is used. Arguments are validated before any I/O.
    pub async fn fetch_intraday(
        &self,
        symbol: &str,
        date: Option<&str>,
    ) -> Result<IntradayResponse, IntradayError> {
        let symbol = normalize_symbol(symbol)?;
        let window = resolve_window(date)?;

        let span = tracing::info_span!(
            "intraday",
            request_id = %Uuid::new_v4(),
            symbol = %symbol,
            date = date.unwrap_or("latest"),
        );

        async move {
            let raw = self.source.fetch_chart(&symbol, &window).await?;
            let payload = ChartPayload::from_response(raw)?;
            let data = normalize(&payload, &self.converter, &self.session);

            let received = payload.timestamps().len();
            record_bars(data.len());
            tracing::info!(
                received,
                kept = data.len(),
                dropped = received - data.len(),
                "Normalized intraday bars"
            );

            Ok::<_, IntradayError>(IntradayResponse::new(symbol, data))
        }
        .instrument(span)
        .await
    }
}

/// Trimmed, upper-cased ticker; rejects values that cannot be a path segment
fn normalize_symbol(raw: &str) -> Result<String, IntradayError> {
    let symbol = raw.trim();
    if symbol.is_empty() {
        return Err(IntradayError::InvalidArgument("symbol is required".into()));
    }
    if symbol.chars().any(|c| c.is_whitespace() || c == '/' || c.is_control()) {
        return Err(IntradayError::InvalidArgument(format!(
            "invalid symbol {symbol:?}"
        )));
    }
    Ok(symbol.to_uppercase())
}
