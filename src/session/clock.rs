//! Epoch ⇄ venue-local time conversion

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// Converts between UTC epoch seconds and local wall-clock time
pub trait LocalTimeConverter: Send + Sync {
    /// Local wall-clock time for an epoch-second instant.
    ///
    /// Returns `None` when the instant is outside the representable range.
    fn to_local(&self, epoch_seconds: i64) -> Option<NaiveDateTime>;

    /// Epoch seconds for a local wall-clock time.
    ///
    /// Ambiguous times resolve to the earlier instant; times skipped by a
    /// DST transition return `None`.
    fn to_epoch(&self, local: NaiveDateTime) -> Option<i64>;
}

/// [`LocalTimeConverter`] backed by the IANA timezone database
#[derive(Debug, Clone, Copy)]
pub struct ZoneConverter {
    tz: Tz,
}

impl ZoneConverter {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Converter for the trading venue (America/New_York)
    pub fn venue() -> Self {
        Self::new(super::VENUE_TZ)
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }
}

impl Default for ZoneConverter {
    fn default() -> Self {
        Self::venue()
    }
}

impl LocalTimeConverter for ZoneConverter {
    fn to_local(&self, epoch_seconds: i64) -> Option<NaiveDateTime> {
        let utc = DateTime::from_timestamp(epoch_seconds, 0)?;
        Some(utc.with_timezone(&self.tz).naive_local())
    }

    fn to_epoch(&self, local: NaiveDateTime) -> Option<i64> {
        self.tz
            .from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.timestamp())
    }
}
