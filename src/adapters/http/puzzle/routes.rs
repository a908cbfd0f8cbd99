//! Route configuration for the puzzle endpoint.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::response::route_not_found;
use crate::adapters::http::AppState;

use super::handlers::get_today_puzzle;

/// Routes:
/// - `GET /api/puzzle/today` - Today's puzzle
pub fn puzzle_router() -> Router<AppState> {
    Router::new().route(
        "/api/puzzle/today",
        get(get_today_puzzle).fallback(route_not_found),
    )
}
