//! GetTodayPuzzleHandler - Query handler resolving the puzzle of the day.

use std::sync::Arc;

use crate::domain::foundation::PuzzleDate;
use crate::domain::puzzle::{assemble_rounds, ImageLinks, PuzzleError, Round, RoundShuffler};
use crate::ports::{Clock, PuzzleReader};

/// Query for today's puzzle.
#[derive(Debug, Clone)]
pub struct GetTodayPuzzleQuery {
    /// How image keys are rendered for the requesting client.
    pub links: ImageLinks,
}

/// A resolved puzzle, safe to hand to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleView {
    pub date: PuzzleDate,
    pub rounds: Vec<Round>,
}

/// Handler resolving "today" in UTC and assembling that puzzle's rounds.
pub struct GetTodayPuzzleHandler {
    reader: Arc<dyn PuzzleReader>,
    clock: Arc<dyn Clock>,
    shuffler: Arc<dyn RoundShuffler>,
}

impl GetTodayPuzzleHandler {
    pub fn new(
        reader: Arc<dyn PuzzleReader>,
        clock: Arc<dyn Clock>,
        shuffler: Arc<dyn RoundShuffler>,
    ) -> Self {
        Self {
            reader,
            clock,
            shuffler,
        }
    }

    /// The date the next `handle` call will look up.
    pub fn today(&self) -> PuzzleDate {
        self.clock.today()
    }

    pub async fn handle(&self, query: GetTodayPuzzleQuery) -> Result<PuzzleView, PuzzleError> {
        self.resolve(self.today(), &query.links).await
    }

    /// Resolves the puzzle seeded for `date`.
    ///
    /// The image query depends on the puzzle id, so the two reads are
    /// sequential.
    pub async fn resolve(
        &self,
        date: PuzzleDate,
        links: &ImageLinks,
    ) -> Result<PuzzleView, PuzzleError> {
        let puzzle = self
            .reader
            .find_by_date(date)
            .await?
            .ok_or_else(|| PuzzleError::not_found(date))?;

        let images = self.reader.list_images(puzzle.id).await?;
        tracing::debug!(
            puzzle_id = %puzzle.id,
            %date,
            image_count = images.len(),
            "Resolved puzzle"
        );

        let rounds = assemble_rounds(images, self.shuffler.as_ref(), links);

        Ok(PuzzleView { date, rounds })
    }
}
