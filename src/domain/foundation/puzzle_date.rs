//! Calendar date identifying the puzzle of the day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Timestamp, ValidationError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A UTC calendar date rendered as fixed-width `YYYY-MM-DD`.
///
/// This is the lookup key for the daily puzzle. It is always computed in
/// UTC so that every server resolves the same puzzle regardless of locale,
/// and it advances exactly at UTC midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PuzzleDate(NaiveDate);

impl PuzzleDate {
    /// Wraps an existing calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Resolves the UTC calendar date of the given instant.
    pub fn on(at: Timestamp) -> Self {
        Self(at.utc_date())
    }

    /// Returns the inner calendar date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for PuzzleDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts unpadded fields; the identifier is fixed-width.
        if s.len() != 10 {
            return Err(ValidationError::invalid_format(
                "puzzle_date",
                "expected YYYY-MM-DD",
            ));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("puzzle_date", e.to_string()))
    }
}

impl From<PuzzleDate> for String {
    fn from(date: PuzzleDate) -> Self {
        date.to_string()
    }
}

impl TryFrom<String> for PuzzleDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
