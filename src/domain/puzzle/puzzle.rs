//! Puzzle records as read from the relational store.

use crate::domain::foundation::{ImageKey, PuzzleDate, PuzzleId, RoundIndex};

/// One day's game instance.
///
/// # Invariants
///
/// - At most one puzzle exists per `date`
/// - Created by the seeding process; this crate only reads it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub id: PuzzleId,
    pub date: PuzzleDate,
}

impl Puzzle {
    pub fn new(id: PuzzleId, date: PuzzleDate) -> Self {
        Self { id, date }
    }
}

/// One image row belonging to a puzzle round.
///
/// The stored `is_real` answer flag is never read, so which image is genuine
/// is not known to this process at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleImage {
    pub puzzle_id: PuzzleId,
    pub round_index: RoundIndex,
    pub image_key: ImageKey,
}

impl PuzzleImage {
    pub fn new(puzzle_id: PuzzleId, round_index: RoundIndex, image_key: ImageKey) -> Self {
        Self {
            puzzle_id,
            round_index,
            image_key,
        }
    }
}
