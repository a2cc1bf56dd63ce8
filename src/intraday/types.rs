//! Pipeline response envelope

use crate::quote::QuoteBar;
use crate::session::{BAR_INTERVAL, SESSION_LABEL, VENUE_TZ_NAME};
use serde::Serialize;

/// Normalized intraday series for one symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntradayResponse {
    pub symbol: String,
    pub timezone: &'static str,
    pub interval: &'static str,
    pub session: &'static str,
    pub count: usize,
    pub data: Vec<QuoteBar>,
}

impl IntradayResponse {
    pub fn new(symbol: impl Into<String>, data: Vec<QuoteBar>) -> Self {
        Self {
            symbol: symbol.into(),
            timezone: VENUE_TZ_NAME,
            interval: BAR_INTERVAL,
            session: SESSION_LABEL,
            count: data.len(),
            data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
