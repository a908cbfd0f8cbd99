//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDate, Utc};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the UTC calendar date this timestamp falls on.
    pub fn utc_date(&self) -> NaiveDate {
        self.0.date_naive()
    }
}
