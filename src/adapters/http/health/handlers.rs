//! HTTP handlers for the health endpoint.

use axum::{extract::State, http::StatusCode, response::Response};

use crate::adapters::http::response::{internal_error, json_response};
use crate::adapters::http::AppState;
use crate::application::HealthError;

use super::dto::HealthResponse;

/// GET /api/health - List the relational store's tables
pub async fn check_health(State(state): State<AppState>) -> Response {
    match state.health_handler.handle().await {
        Ok(report) => json_response(StatusCode::OK, &HealthResponse::from(report)),
        Err(e) => handle_health_error(e),
    }
}

fn handle_health_error(error: HealthError) -> Response {
    match error {
        HealthError::StoreUnavailable(msg) => {
            tracing::error!(error = %msg, "Health check failed");
            internal_error()
        }
    }
}
