//! Health query handlers.

mod check_health;

pub use check_health::{CheckHealthHandler, HealthError, HealthReport};
