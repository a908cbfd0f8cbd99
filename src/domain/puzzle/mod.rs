//! Puzzle domain module.
//!
//! A puzzle is one day's game. Its images are grouped into rounds by
//! `round_index`; each round is shuffled per request and rendered as
//! client-facing links. The answer flag stored alongside each image is never
//! read.

mod errors;
mod links;
#[allow(clippy::module_inception)]
mod puzzle;
mod rounds;
mod shuffle;

pub use errors::PuzzleError;
pub use links::{ImageLinks, IMAGE_ROUTE_PREFIX};
pub use puzzle::{Puzzle, PuzzleImage};
pub use rounds::{assemble_rounds, Round};
pub use shuffle::{KeepOrder, RandomShuffler, RoundShuffler, SeededShuffler};
