//! Route configuration for the image proxy.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::response::route_not_found;
use crate::adapters::http::AppState;

use super::handlers::fetch_image;

/// Routes:
/// - `GET /img/<percent-encoded key>` - Image bytes
/// - `GET /img/` - Empty key, answered with 400
///
/// A catch-all segment never matches the empty remainder, hence the second
/// route.
pub fn image_router() -> Router<AppState> {
    Router::new()
        .route("/img/", get(fetch_image).fallback(route_not_found))
        .route("/img/*key", get(fetch_image).fallback(route_not_found))
}
