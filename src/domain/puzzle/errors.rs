//! Puzzle-specific error types.

use crate::domain::foundation::{DomainError, PuzzleDate};

/// Puzzle resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// No puzzle has been seeded for the date.
    NotFound(PuzzleDate),
    /// Infrastructure error.
    Infrastructure(String),
}

impl PuzzleError {
    pub fn not_found(date: PuzzleDate) -> Self {
        PuzzleError::NotFound(date)
    }
    pub fn message(&self) -> String {
        match self {
            PuzzleError::NotFound(date) => format!("No puzzle seeded for {}", date),
            PuzzleError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PuzzleError {}

impl From<DomainError> for PuzzleError {
    fn from(err: DomainError) -> Self {
        PuzzleError::Infrastructure(err.to_string())
    }
}
