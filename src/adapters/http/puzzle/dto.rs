//! Response DTOs for the puzzle endpoint.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::application::PuzzleView;
use crate::domain::foundation::PuzzleDate;
use crate::domain::puzzle::Round;

/// `GET /api/puzzle/today` success body.
#[derive(Debug, Serialize)]
pub struct PuzzleResponse {
    pub date: PuzzleDate,
    pub rounds: RoundsResponse,
}

/// Rounds keyed by stringified index, written in ascending numeric order.
///
/// A plain string-keyed map would sort `"10"` before `"2"`.
#[derive(Debug)]
pub struct RoundsResponse(Vec<Round>);

impl Serialize for RoundsResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for round in &self.0 {
            map.serialize_entry(&round.index.to_string(), &round.images)?;
        }
        map.end()
    }
}

impl From<PuzzleView> for PuzzleResponse {
    fn from(view: PuzzleView) -> Self {
        let mut rounds = view.rounds;
        rounds.sort_by_key(|r| r.index);
        Self {
            date: view.date,
            rounds: RoundsResponse(rounds),
        }
    }
}

/// `GET /api/puzzle/today` body when nothing is seeded for the date.
#[derive(Debug, Serialize)]
pub struct PuzzleNotFoundResponse {
    pub error: &'static str,
    pub date: PuzzleDate,
}

impl PuzzleNotFoundResponse {
    pub fn new(date: PuzzleDate) -> Self {
        Self {
            error: "No puzzle seeded for today",
            date,
        }
    }
}
