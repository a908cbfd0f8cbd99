//! In-Memory Puzzle Store Adapter
//!
//! Holds puzzle and image rows in memory, shaped like the relational tables.
//! Useful for testing and development.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::memory::InMemoryPuzzleStore;
//!
//! let store = InMemoryPuzzleStore::new()
//!     .with_puzzle(1, "2026-01-16".parse()?)
//!     .with_image(1, 0, "2026-01-16/r0_1.png")
//!     .with_image(1, 0, "2026-01-16/r0_2.png");
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{
    DomainError, ImageKey, PuzzleDate, PuzzleId, RoundIndex,
};
use crate::domain::puzzle::{Puzzle, PuzzleImage};
use crate::ports::{PuzzleReader, StoreIntrospector};

/// Row of `puzzle_images` as stored, before validation.
#[derive(Debug, Clone)]
struct ImageRow {
    puzzle_id: i64,
    round_index: i32,
    image_url: String,
}

/// In-memory stand-in for the `puzzles` and `puzzle_images` tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPuzzleStore {
    puzzles: Vec<Puzzle>,
    images: Vec<ImageRow>,
}

impl InMemoryPuzzleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a puzzle. A second puzzle for the same date replaces the first,
    /// matching the one-puzzle-per-date constraint.
    pub fn with_puzzle(mut self, id: i64, date: PuzzleDate) -> Self {
        self.puzzles.retain(|p| p.date != date);
        self.puzzles.push(Puzzle::new(PuzzleId::new(id), date));
        self
    }

    /// Seed an image row.
    pub fn with_image(
        mut self,
        puzzle_id: i64,
        round_index: i32,
        image_url: impl Into<String>,
    ) -> Self {
        self.images.push(ImageRow {
            puzzle_id,
            round_index,
            image_url: image_url.into(),
        });
        self
    }

    /// Number of seeded puzzles
    pub fn puzzle_count(&self) -> usize {
        self.puzzles.len()
    }
}

#[async_trait]
impl PuzzleReader for InMemoryPuzzleStore {
    async fn find_by_date(&self, date: PuzzleDate) -> Result<Option<Puzzle>, DomainError> {
        Ok(self.puzzles.iter().find(|p| p.date == date).cloned())
    }

    async fn list_images(&self, puzzle_id: PuzzleId) -> Result<Vec<PuzzleImage>, DomainError> {
        self.images
            .iter()
            .filter(|row| row.puzzle_id == puzzle_id.as_i64())
            .map(|row| -> Result<PuzzleImage, DomainError> {
                Ok(PuzzleImage::new(
                    puzzle_id,
                    RoundIndex::try_from_i32(row.round_index)?,
                    ImageKey::new(row.image_url.clone())?,
                ))
            })
            .collect()
    }
}

#[async_trait]
impl StoreIntrospector for InMemoryPuzzleStore {
    async fn list_tables(&self) -> Result<Vec<String>, DomainError> {
        Ok(vec!["puzzle_images".to_string(), "puzzles".to_string()])
    }
}
