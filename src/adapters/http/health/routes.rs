//! Route configuration for the health endpoint.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::response::route_not_found;
use crate::adapters::http::AppState;

use super::handlers::check_health;

pub fn health_router() -> Router<AppState> {
    Router::new().route("/api/health", get(check_health).fallback(route_not_found))
}
