//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the puzzle domain.

mod errors;
mod ids;
mod puzzle_date;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ImageKey, PuzzleId, RoundIndex};
pub use puzzle_date::PuzzleDate;
pub use timestamp::Timestamp;
