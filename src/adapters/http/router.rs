//! Application router.
//!
//! Assembles the endpoint routers, the plain-text 404 fallback, the `HEAD`
//! guard, and the origin policy layer that wraps everything, fallbacks
//! included.

use std::sync::Arc;

use axum::{middleware, Router};

use super::health::health_router;
use super::image::image_router;
use super::middleware::{origin_policy_middleware, reject_head, OriginPolicy};
use super::puzzle::puzzle_router;
use super::response::route_not_found;
use super::AppState;

/// Builds the full HTTP surface.
///
/// Routes:
/// - `OPTIONS <any>` - 204 preflight
/// - `GET /api/health` - Table listing
/// - `GET /api/puzzle/today` - Today's puzzle
/// - `GET /img/<key>` - Image proxy
/// - anything else - 404 `Not Found`
pub fn app_router(state: AppState, policy: OriginPolicy) -> Router {
    Router::new()
        .merge(health_router())
        .merge(puzzle_router())
        .merge(image_router())
        .fallback(route_not_found)
        .layer(middleware::from_fn(reject_head))
        .layer(middleware::from_fn_with_state(
            Arc::new(policy),
            origin_policy_middleware,
        ))
        .with_state(state)
}
