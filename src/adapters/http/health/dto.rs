//! Response DTOs for the health endpoint.

use serde::Serialize;

use crate::application::HealthReport;

/// `GET /api/health` body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub tables: Vec<TableEntry>,
}

/// One table of the relational store.
#[derive(Debug, Serialize)]
pub struct TableEntry {
    pub name: String,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            ok: true,
            tables: report
                .tables
                .into_iter()
                .map(|name| TableEntry { name })
                .collect(),
        }
    }
}
