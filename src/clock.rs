//! # Clock
//!
//! The current time is an explicit input to decoding and rendering. Handlers
//! read a [`Clock`] once per request and thread the reading through, so the
//! rendering pipeline stays a pure function of `(query, now)`.
//!
//! All displayed timestamps use Indian Standard Time regardless of where the
//! server runs.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// IST is UTC+05:30 with no daylight saving.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Read the clock.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock that never goes backwards.
///
/// Readings are clamped to the highest epoch-millisecond value handed out so
/// far, so generated receipt ids (`ADV-<epoch-ms>`) are non-decreasing within
/// a process even if the system clock is stepped back.
#[derive(Debug, Default)]
pub struct SystemClock {
    high_water_ms: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        let ms = now.timestamp_millis();
        let prev = self.high_water_ms.fetch_max(ms, Ordering::SeqCst);
        if prev > ms {
            DateTime::from_timestamp_millis(prev).unwrap_or(now)
        } else {
            now
        }
    }
}

/// A clock frozen at one instant. Useful for previews and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The Indian Standard Time offset.
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Format an instant the way an `en-IN` browser does for
/// `toLocaleString(..., { timeZone: "Asia/Kolkata" })`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use advisory_receipt::clock::format_ist;
///
/// let t = Utc.with_ymd_and_hms(2026, 10, 19, 10, 15, 30).unwrap();
/// assert_eq!(format_ist(t), "19/10/2026, 3:45:30 pm");
/// ```
pub fn format_ist(now: DateTime<Utc>) -> String {
    now.with_timezone(&ist())
        .format("%-d/%-m/%Y, %-I:%M:%S %P")
        .to_string()
}
