//! Response formatting shared by all endpoints.
//!
//! JSON bodies are pretty-printed and labelled `application/json;
//! charset=utf-8`. Plain-text fallbacks carry fixed bodies.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

const INTERNAL_ERROR_BODY: &str = "{\n  \"error\": \"Internal server error\"\n}";

/// Body of 500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn internal() -> Self {
        Self {
            error: "Internal server error".to_string(),
        }
    }
}

/// Pretty-printed JSON response.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string_pretty(body) {
        Ok(json) => with_json_content_type(status, json),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response body");
            with_json_content_type(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_BODY.to_string(),
            )
        }
    }
}

fn with_json_content_type(status: StatusCode, body: String) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        )],
        body,
    )
        .into_response()
}

/// 400 `Bad Request`, plain text.
pub fn bad_request() -> Response {
    (StatusCode::BAD_REQUEST, "Bad Request").into_response()
}

/// 404 `Not Found`, plain text.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// 500 with a generic JSON body. Details stay in the logs.
pub fn internal_error() -> Response {
    json_response(StatusCode::INTERNAL_SERVER_ERROR, &ErrorResponse::internal())
}

/// Fallback for unknown paths and unsupported methods.
pub async fn route_not_found() -> Response {
    not_found()
}
