//! Turns away `HEAD` requests.
//!
//! axum answers `HEAD` with any `GET` route. The service exposes `GET` only,
//! so `HEAD` is treated like every other unsupported method.

use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::adapters::http::response::not_found;

/// Answers `HEAD` with the plain 404 and passes everything else through.
pub async fn reject_head(request: Request, next: Next) -> Response {
    if request.method() == Method::HEAD {
        return not_found();
    }
    next.run(request).await
}
