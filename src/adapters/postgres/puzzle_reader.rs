//! PostgreSQL implementation of PuzzleReader.
//!
//! Reads the `puzzles` and `puzzle_images` tables populated by the seeding
//! process. The `image_url` column holds an object-store key, not a URL.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, ImageKey, PuzzleDate, PuzzleId, RoundIndex, ValidationError,
};
use crate::domain::puzzle::{Puzzle, PuzzleImage};
use crate::ports::PuzzleReader;

/// PostgreSQL implementation of PuzzleReader.
#[derive(Clone)]
pub struct PostgresPuzzleReader {
    pool: PgPool,
}

impl PostgresPuzzleReader {
    /// Creates a new PostgresPuzzleReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PuzzleReader for PostgresPuzzleReader {
    async fn find_by_date(&self, date: PuzzleDate) -> Result<Option<Puzzle>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id::BIGINT AS id
            FROM puzzles
            WHERE puzzle_date = $1
            "#,
        )
        .bind(date.as_naive())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch puzzle", e))?;

        match row {
            Some(row) => {
                let id: i64 = row
                    .try_get("id")
                    .map_err(|e| DomainError::database("Failed to get id", e))?;
                Ok(Some(Puzzle::new(PuzzleId::new(id), date)))
            }
            None => Ok(None),
        }
    }

    async fn list_images(&self, puzzle_id: PuzzleId) -> Result<Vec<PuzzleImage>, DomainError> {
        // No ORDER BY: presentation order is decided by the round shuffler.
        // `is_real` stays in the database.
        let rows = sqlx::query(
            r#"
            SELECT round_index::INTEGER AS round_index, image_url
            FROM puzzle_images
            WHERE puzzle_id = $1
            "#,
        )
        .bind(puzzle_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list puzzle images", e))?;

        rows.into_iter()
            .map(|row| row_to_puzzle_image(puzzle_id, row))
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_puzzle_image(
    puzzle_id: PuzzleId,
    row: sqlx::postgres::PgRow,
) -> Result<PuzzleImage, DomainError> {
    let round_index: i32 = row
        .try_get("round_index")
        .map_err(|e| DomainError::database("Failed to get round_index", e))?;

    let image_url: String = row
        .try_get("image_url")
        .map_err(|e| DomainError::database("Failed to get image_url", e))?;

    image_from_columns(puzzle_id, round_index, image_url)
}

fn image_from_columns(
    puzzle_id: PuzzleId,
    round_index: i32,
    image_url: String,
) -> Result<PuzzleImage, DomainError> {
    let invalid_row = |e: ValidationError| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid image row for puzzle {}: {}", puzzle_id, e),
        )
    };
    let round_index = RoundIndex::try_from_i32(round_index).map_err(&invalid_row)?;
    let image_key = ImageKey::new(image_url).map_err(&invalid_row)?;

    Ok(PuzzleImage::new(puzzle_id, round_index, image_key))
}
