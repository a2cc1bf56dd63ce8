//! Trading session model
//!
//! Regular Trading Hours (RTH) for US equities, the local-time conversion
//! capability used to classify bars, and the query window resolver.

mod clock;
mod window;

pub use clock::{LocalTimeConverter, ZoneConverter};
pub use window::{resolve_window, resolve_window_for, WindowSpec, RELATIVE_RANGE};

use chrono::{NaiveTime, Timelike};
use chrono_tz::Tz;

/// Timezone of the trading venue
pub const VENUE_TZ: Tz = chrono_tz::America::New_York;

/// IANA name of [`VENUE_TZ`], as reported to callers
pub const VENUE_TZ_NAME: &str = "America/New_York";

/// Bar interval requested from the provider
pub const BAR_INTERVAL: &str = "1m";

/// Human-readable session label
pub const SESSION_LABEL: &str = "RTH (09:30–16:00)";

/// Minutes requested past the session close to absorb provider boundary rounding
pub const CLOSE_BUFFER_MINUTES: i64 = 2;

/// Inclusive local session bounds at minute granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    /// First retained minute
    pub open: (u32, u32),
    /// Last retained minute
    pub close: (u32, u32),
}

impl SessionWindow {
    /// Regular trading hours, 09:30 through 16:00
    pub const RTH: SessionWindow = SessionWindow {
        open: (9, 30),
        close: (16, 0),
    };

    /// Whether a local time falls inside the session.
    ///
    /// Only the hour and minute are compared, so 16:00:59 still counts as
    /// 16:00 while 16:01 and the close buffer minutes are excluded.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let hm = (time.hour(), time.minute());
        hm >= self.open && hm <= self.close
    }

    /// Session open as a wall-clock time
    pub fn open_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.open.0, self.open.1, 0)
    }

    /// Session close as a wall-clock time
    pub fn close_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.close.0, self.close.1, 0)
    }
}

impl Default for SessionWindow {
    fn default() -> Self {
        Self::RTH
    }
}
