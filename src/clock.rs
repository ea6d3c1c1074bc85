//! Time source for line timestamps and rotation decisions.
//!
//! Every timestamp the crate emits is localized to one fixed timezone
//! (`Asia/Bangkok` unless configured otherwise). The clock is injectable so
//! rotation behavior can be tested without manipulating real file
//! modification times.

use crate::internal;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use std::sync::{Mutex, PoisonError};

/// Line timestamps: `2018-01-18T09:30:00`.
pub const LINE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Rotated-backup suffixes: `2018-01-18`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timezone used when none is configured.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Bangkok;

/// Source of "now" for timestamps and calendar-day comparisons.
pub trait Clock: Send + Sync {
    /// Current instant, localized to the clock's timezone.
    fn now(&self) -> DateTime<Tz>;

    /// Current calendar date in the clock's timezone, the unit rotation reasons in.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock localized to a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    zone: Tz,
}

impl SystemClock {
    /// Wall clock in the default timezone.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zone: DEFAULT_TIMEZONE,
        }
    }

    /// Wall clock in a named IANA timezone.
    ///
    /// An unknown name is tolerated: the clock falls back to UTC with a
    /// diagnostic warning. A logging library must never crash over a
    /// timezone lookup.
    #[must_use]
    pub fn with_zone(name: &str) -> Self {
        let zone = name.parse::<Tz>().unwrap_or_else(|_| {
            internal::warn("CLOCK", &format!("unknown timezone '{name}', using UTC"));
            Tz::UTC
        });
        Self { zone }
    }

    /// The timezone this clock localizes to.
    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.zone)
    }
}

/// Settable clock for tests. Lets a test cross a calendar-day boundary
/// without waiting for midnight.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Tz>>,
}

impl ManualClock {
    /// Clock frozen at the given instant.
    #[must_use]
    pub const fn new(now: DateTime<Tz>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Clock frozen at the given local time in the default timezone.
    #[must_use]
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let now = DEFAULT_TIMEZONE
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .unwrap_or_else(|| Utc::now().with_timezone(&DEFAULT_TIMEZONE));
        Self::new(now)
    }

    /// Moves the clock to a new instant.
    pub fn set(&self, now: DateTime<Tz>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Advances the clock by whole days, the unit rotation cares about.
    pub fn advance_days(&self, days: i64) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now = *now + chrono::Duration::days(days);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Tz> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Renders an instant the way record lines carry it.
#[must_use]
pub fn format_timestamp(instant: &DateTime<Tz>) -> String {
    instant.format(LINE_TIME_FORMAT).to_string()
}

/// Renders a calendar date the way rotated-backup suffixes carry it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
