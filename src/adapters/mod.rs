//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Puzzle rows and table listing (sqlx)
//! - `storage` - Image objects (object_store: S3/R2, local, memory)
//! - `memory` - In-memory puzzle rows for tests and local demos
//! - `clock` - System and fixed clocks
//! - `http` - axum routes, handlers, and middleware

pub mod clock;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use memory::InMemoryPuzzleStore;
pub use storage::ObjectImageStore;
