//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PuzzleReader` - Puzzle and image rows from the relational store
//! - `StoreIntrospector` - Table listing for diagnostics
//! - `ImageStore` - Streaming reads from the object store
//! - `Clock` - Wall-clock time for resolving "today"

mod clock;
mod image_store;
mod puzzle_reader;
mod store_introspector;

pub use clock::Clock;
pub use image_store::ImageStore;
pub use puzzle_reader::PuzzleReader;
pub use store_introspector::StoreIntrospector;
