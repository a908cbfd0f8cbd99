//! Store introspection port, used by the health endpoint.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Lists the tables known to the relational store.
#[async_trait]
pub trait StoreIntrospector: Send + Sync {
    /// Table names in ascending order.
    async fn list_tables(&self) -> Result<Vec<String>, DomainError>;
}
