//! Query window resolution
//!
//! Turns an optional calendar date into the provider query window: an explicit
//! epoch-second range covering the session (plus a short close buffer) or a
//! relative range for the most recent trading day.

use super::{LocalTimeConverter, SessionWindow, ZoneConverter, BAR_INTERVAL, CLOSE_BUFFER_MINUTES};
use crate::intraday::IntradayError;
use chrono::{Duration, NaiveDate};

/// Relative range requested when no date is given
pub const RELATIVE_RANGE: &str = "1d";

/// Provider query window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowSpec {
    /// Explicit epoch-second bounds
    Explicit { period1: i64, period2: i64 },
    /// Provider-relative range such as "1d"
    Relative { range: &'static str },
}

impl WindowSpec {
    /// Query parameters for the chart endpoint, interval included
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("interval", BAR_INTERVAL.to_string())];
        match self {
            WindowSpec::Explicit { period1, period2 } => {
                params.push(("period1", period1.to_string()));
                params.push(("period2", period2.to_string()));
            }
            WindowSpec::Relative { range } => {
                params.push(("range", (*range).to_string()));
            }
        }
        params
    }
}

/// Resolve a `YYYY-MM-DD` date (venue-local) into a query window.
///
/// A malformed date fails with `InvalidArgument` before any I/O happens.
pub fn resolve_window(date: Option<&str>) -> Result<WindowSpec, IntradayError> {
    let date = date.map(parse_date).transpose()?;
    resolve_window_for(date)
}

/// Resolve an already-parsed date into a query window
pub fn resolve_window_for(date: Option<NaiveDate>) -> Result<WindowSpec, IntradayError> {
    let Some(date) = date else {
        return Ok(WindowSpec::Relative {
            range: RELATIVE_RANGE,
        });
    };

    let converter = ZoneConverter::venue();
    let session = SessionWindow::RTH;

    let (open, close) = session
        .open_time()
        .zip(session.close_time())
        .ok_or_else(|| IntradayError::InvalidArgument("invalid session bounds".into()))?;

    let open_local = date.and_time(open);
    let close_local = date.and_time(close) + Duration::minutes(CLOSE_BUFFER_MINUTES);

    let period1 = converter.to_epoch(open_local).ok_or_else(|| {
        IntradayError::InvalidArgument(format!("no local session open on {date}"))
    })?;
    let period2 = converter.to_epoch(close_local).ok_or_else(|| {
        IntradayError::InvalidArgument(format!("no local session close on {date}"))
    })?;

    tracing::debug!(%date, period1, period2, "Resolved explicit query window");

    Ok(WindowSpec::Explicit { period1, period2 })
}

fn parse_date(raw: &str) -> Result<NaiveDate, IntradayError> {
    let raw = raw.trim();
    // chrono accepts unpadded fields and signed years; the API contract does not
    let well_formed = raw.len() == 10
        && raw
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });

    if !well_formed {
        return Err(IntradayError::InvalidArgument(format!(
            "date must be YYYY-MM-DD, got {raw:?}"
        )));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| IntradayError::InvalidArgument(format!("invalid date {raw:?}: {e}")))
}
