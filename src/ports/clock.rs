//! Clock port.
//!
//! Wall-clock time is the only input of the date resolver. Going through a
//! port keeps "today" controllable in tests.

use crate::domain::foundation::{PuzzleDate, Timestamp};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Today's puzzle date in UTC.
    fn today(&self) -> PuzzleDate {
        PuzzleDate::on(self.now())
    }
}
