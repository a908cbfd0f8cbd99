//! HTTP adapter for the diagnostic health endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{HealthResponse, TableEntry};
pub use handlers::check_health;
pub use routes::health_router;
