//! HTTP handlers for the image proxy.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, StatusCode, Uri},
    response::Response,
};

use crate::adapters::http::response::{bad_request, internal_error, not_found};
use crate::adapters::http::AppState;
use crate::application::FetchImageQuery;
use crate::domain::image::{ImageError, StoredImage, DEFAULT_CONTENT_TYPE, IMMUTABLE_CACHE_CONTROL};
use crate::domain::puzzle::IMAGE_ROUTE_PREFIX;

/// GET /img/<key> - Stream an image out of the object store
///
/// The key is taken from the raw request path so an encoded `%2F` and a
/// literal `/` decode to the same object.
pub async fn fetch_image(State(state): State<AppState>, uri: Uri) -> Response {
    let raw_key = uri
        .path()
        .strip_prefix(IMAGE_ROUTE_PREFIX)
        .unwrap_or_default()
        .to_string();

    match state.image_handler.handle(FetchImageQuery { raw_key }).await {
        Ok(image) => image_response(image),
        Err(e) => handle_image_error(e),
    }
}

fn image_response(image: StoredImage) -> Response {
    let content_type = HeaderValue::from_str(image.content_type_or_default())
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
    let size = image.size;

    let mut response = Response::new(Body::from_stream(image.body));
    *response.status_mut() = StatusCode::OK;

    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, content_type);
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(IMMUTABLE_CACHE_CONTROL),
    );
    if let Some(size) = size {
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(size));
    }

    response
}

fn handle_image_error(error: ImageError) -> Response {
    match error {
        ImageError::BadKey(reason) => {
            tracing::debug!(%reason, "Rejected image key");
            bad_request()
        }
        // Already logged by the query handler.
        ImageError::NotFound(_) => not_found(),
        ImageError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Failed to fetch image");
            internal_error()
        }
    }
}
