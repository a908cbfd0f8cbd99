//! Puzzle reader port (read side).
//!
//! Defines the contract for looking up the seeded puzzle of a date and the
//! image rows that belong to it. The seeding process owns all writes; this
//! crate never mutates puzzle data.

use crate::domain::foundation::{DomainError, PuzzleDate, PuzzleId};
use crate::domain::puzzle::{Puzzle, PuzzleImage};
use async_trait::async_trait;

/// Reader port for puzzle queries.
#[async_trait]
pub trait PuzzleReader: Send + Sync {
    /// Find the puzzle seeded for a calendar date.
    ///
    /// Returns `None` if no puzzle exists for that date.
    async fn find_by_date(&self, date: PuzzleDate) -> Result<Option<Puzzle>, DomainError>;

    /// List every image row of a puzzle.
    ///
    /// Row order is unspecified and must not be relied upon.
    async fn list_images(&self, puzzle_id: PuzzleId) -> Result<Vec<PuzzleImage>, DomainError>;
}
