//! Injectable source of the current date.

use chrono::{NaiveDate, Utc};

/// Supplies the current calendar date in UTC.
pub trait Clock: Send + Sync {
    /// Returns today's date in UTC.
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
