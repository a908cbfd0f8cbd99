//! Puzzle query handlers.

mod get_today_puzzle;

pub use get_today_puzzle::{GetTodayPuzzleHandler, GetTodayPuzzleQuery, PuzzleView};
