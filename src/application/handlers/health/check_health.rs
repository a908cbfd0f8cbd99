//! CheckHealthHandler - Diagnostic listing of the relational store's tables.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::StoreIntrospector;

/// Result of a health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub tables: Vec<String>,
}

/// Health check errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HealthError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<DomainError> for HealthError {
    fn from(err: DomainError) -> Self {
        HealthError::StoreUnavailable(err.to_string())
    }
}

pub struct CheckHealthHandler {
    introspector: Arc<dyn StoreIntrospector>,
}

impl CheckHealthHandler {
    pub fn new(introspector: Arc<dyn StoreIntrospector>) -> Self {
        Self { introspector }
    }

    pub async fn handle(&self) -> Result<HealthReport, HealthError> {
        let tables = self.introspector.list_tables().await?;
        Ok(HealthReport { tables })
    }
}
