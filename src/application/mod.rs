//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    CheckHealthHandler, FetchImageHandler, FetchImageQuery, GetTodayPuzzleHandler,
    GetTodayPuzzleQuery, HealthError, HealthReport, PuzzleView,
};
