//! PostgreSQL implementation of StoreIntrospector.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::ports::StoreIntrospector;

/// Lists base tables of the connection's current schema.
#[derive(Clone)]
pub struct PostgresStoreIntrospector {
    pool: PgPool,
}

impl PostgresStoreIntrospector {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreIntrospector for PostgresStoreIntrospector {
    async fn list_tables(&self) -> Result<Vec<String>, DomainError> {
        // information_schema columns are `sql_identifier`; cast for decoding.
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT table_name::TEXT
            FROM information_schema.tables
            WHERE table_schema = current_schema()
              AND table_type = 'BASE TABLE'
            ORDER BY table_name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list tables", e))?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
