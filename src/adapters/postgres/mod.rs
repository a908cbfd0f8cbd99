//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! This module provides adapters for PostgreSQL-backed reads:
//! - `PostgresPuzzleReader` - Puzzle lookup by date and its image rows
//! - `PostgresStoreIntrospector` - Table listing for the health endpoint

mod puzzle_reader;
mod store_introspector;

pub use puzzle_reader::PostgresPuzzleReader;
pub use store_introspector::PostgresStoreIntrospector;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens a connection pool sized from configuration.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database("Failed to connect to database", e))
}
