//! Clock abstraction.
//!
//! The store reads the time through [`Clock`] so tests can freeze or step it
//! instead of sleeping between writes.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
#[cfg(any(test, feature = "test_utils"))]
use chrono::Duration;
#[cfg(any(test, feature = "test_utils"))]
use std::cell::Cell;

/// Format used for the `date` field shown next to each note.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Cell<DateTime<Utc>>,
}

#[cfg(any(test, feature = "test_utils"))]
impl FixedClock {
    pub fn at_millis(millis: i64) -> Self {
        let time = DateTime::from_timestamp_millis(millis).unwrap_or_default();
        Self {
            current: Cell::new(time),
        }
    }

    pub fn set_millis(&self, millis: i64) {
        self.current
            .set(DateTime::from_timestamp_millis(millis).unwrap_or_default());
    }

    pub fn advance(&self, duration: Duration) {
        self.current.set(self.current.get() + duration);
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl Default for FixedClock {
    fn default() -> Self {
        Self::at_millis(1_700_000_000_000)
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.current.get()
    }
}

/// Renders a wall-clock time as `DD/MM/YYYY HH:MM`.
pub fn format_date(time: &NaiveDateTime) -> String {
    time.format(DATE_FORMAT).to_string()
}

/// Display string for an instant, in the machine's local time zone.
pub fn display_date(time: DateTime<Utc>) -> String {
    format_date(&time.with_timezone(&Local).naive_local())
}
