//! Application handlers.
//!
//! Query handlers that orchestrate domain operations over ports. Every
//! operation in this crate is a read.

pub mod health;
pub mod image;
pub mod puzzle;

pub use health::{CheckHealthHandler, HealthError, HealthReport};
pub use image::{FetchImageHandler, FetchImageQuery};
pub use puzzle::{GetTodayPuzzleHandler, GetTodayPuzzleQuery, PuzzleView};
