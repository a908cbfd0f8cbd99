//! HTTP adapter for the puzzle of the day.

mod dto;
mod handlers;
mod routes;

pub use dto::{PuzzleNotFoundResponse, PuzzleResponse, RoundsResponse};
pub use handlers::get_today_puzzle;
pub use routes::puzzle_router;
