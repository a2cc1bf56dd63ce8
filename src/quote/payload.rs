//! Provider chart payload
//!
//! Mirrors one entry of `chart.result` from the chart API. Every field is
//! optional because the provider omits arrays it has no data for.

use crate::intraday::IntradayError;
use serde::Deserialize;
use serde_json::Value;

/// One `chart.result[i]` entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartPayload {
    /// Bar start times, epoch seconds, ascending; `null` entries carry no bar
    #[serde(default)]
    pub timestamp: Option<Vec<Option<i64>>>,
    #[serde(default)]
    pub indicators: Option<Indicators>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Option<Vec<Option<QuoteSeries>>>,
}

/// Index-aligned OHLCV arrays
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuoteSeries {
    #[serde(default)]
    pub open: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub high: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub low: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub volume: Option<Vec<Option<f64>>>,
}

impl ChartPayload {
    /// Extract the first `chart.result` entry from a full provider response
    pub fn from_response(response: Value) -> Result<Self, IntradayError> {
        let mut response = response;
        let entry = response
            .pointer_mut("/chart/result/0")
            .map(Value::take)
            .ok_or_else(|| IntradayError::MalformedProviderData("chart.result[0] missing".into()))?;

        serde_json::from_value(entry)
            .map_err(|e| IntradayError::MalformedProviderData(format!("chart.result[0]: {e}")))
    }

    pub fn timestamps(&self) -> &[Option<i64>] {
        self.timestamp.as_deref().unwrap_or_default()
    }

    /// The first quote series; a missing or `null` entry reads as no series
    pub fn quote(&self) -> Option<&QuoteSeries> {
        self.indicators.as_ref()?.quote.as_ref()?.first()?.as_ref()
    }
}

impl QuoteSeries {
    pub fn open_at(&self, i: usize) -> Option<f64> {
        value_at(&self.open, i)
    }

    pub fn high_at(&self, i: usize) -> Option<f64> {
        value_at(&self.high, i)
    }

    pub fn low_at(&self, i: usize) -> Option<f64> {
        value_at(&self.low, i)
    }

    pub fn close_at(&self, i: usize) -> Option<f64> {
        value_at(&self.close, i)
    }

    pub fn volume_at(&self, i: usize) -> Option<f64> {
        value_at(&self.volume, i)
    }
}

/// Missing array, short array and explicit null all read as `None`
fn value_at(series: &Option<Vec<Option<f64>>>, i: usize) -> Option<f64> {
    series.as_ref()?.get(i).copied().flatten()
}
