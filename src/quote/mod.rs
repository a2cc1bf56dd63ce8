//! Quote bars and provider payload normalization

mod normalizer;
mod payload;

pub use normalizer::{normalize, price_from_f64, round_price, volume_from_f64, PRICE_DECIMALS};
pub use payload::{ChartPayload, Indicators, QuoteSeries};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Wall-clock format of [`QuoteBar::time`]: minute precision, no offset
pub const BAR_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One-minute OHLCV bar in venue-local time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteBar {
    /// Local bar time
    #[serde(serialize_with = "serialize_bar_time")]
    pub time: NaiveDateTime,
    /// Opening price
    #[serde(with = "rust_decimal::serde::float_option")]
    pub open: Option<Decimal>,
    /// Highest price
    #[serde(with = "rust_decimal::serde::float_option")]
    pub high: Option<Decimal>,
    /// Lowest price
    #[serde(with = "rust_decimal::serde::float_option")]
    pub low: Option<Decimal>,
    /// Closing price
    #[serde(with = "rust_decimal::serde::float_option")]
    pub close: Option<Decimal>,
    /// Traded volume
    pub volume: u64,
}

impl QuoteBar {
    /// Bar time as rendered on the wire
    pub fn time_label(&self) -> String {
        self.time.format(BAR_TIME_FORMAT).to_string()
    }
}

fn serialize_bar_time<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(BAR_TIME_FORMAT))
}
