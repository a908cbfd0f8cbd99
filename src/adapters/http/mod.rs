//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter for endpoint exposure; `app_router` puts
//! them together behind the origin policy.

pub mod health;
pub mod image;
pub mod middleware;
pub mod puzzle;
pub mod response;
mod router;
mod state;

// Re-export key types for convenience
pub use middleware::{CorsHeaders, OriginPolicy};
pub use router::app_router;
pub use state::{AppState, LinkSettings};
