//! Storage Adapters
//!
//! Implementations of the ImageStore port for reading image objects.
//!
//! ## Available Adapters
//!
//! - **ObjectImageStore** - Any `object_store` backend (S3/R2, local, memory)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::ObjectImageStore;
//!
//! // Production: backend chosen by configuration
//! let store = ObjectImageStore::from_config(&config.images)?;
//!
//! // Testing: in-memory storage
//! let store = ObjectImageStore::in_memory();
//! ```

mod object_image_store;

pub use object_image_store::ObjectImageStore;
