//! Clock adapters.

use chrono::NaiveTime;

use crate::domain::foundation::{PuzzleDate, Timestamp};
use crate::ports::Clock;

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

const NOON: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(time) => time,
    None => panic!("12:00:00 is a valid time"),
};

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: Timestamp,
}

impl FixedClock {
    pub fn new(at: Timestamp) -> Self {
        Self { at }
    }

    /// Frozen at noon UTC of `date`.
    pub fn on_date(date: PuzzleDate) -> Self {
        let noon = date.as_naive().and_time(NOON).and_utc();
        Self::new(Timestamp::from_datetime(noon))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.at
    }
}
