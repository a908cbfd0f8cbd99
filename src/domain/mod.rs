//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `puzzle` - Daily puzzle records, round assembly, and shuffling
//! - `image` - Stored image objects and key decoding for the proxy

pub mod foundation;
pub mod image;
pub mod puzzle;
