//! Origin policy middleware for axum.
//!
//! Resolves the `Access-Control-Allow-Origin` value for a request against a
//! fixed allowlist and attaches the CORS headers to every response, including
//! errors and fallbacks. Preflight (`OPTIONS`) requests on any path are
//! answered here with `204 No Content` and never reach routing.
//!
//! The resolved origin is always one of the configured origins: an exact
//! match is echoed, anything else (absent, unknown, malformed) gets the
//! default origin. There is no wildcard.
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, Router};
//! use std::sync::Arc;
//!
//! let policy = Arc::new(OriginPolicy::from_config(&config.cors)?);
//!
//! let app = Router::new()
//!     .route("/api/puzzle/today", get(handler))
//!     .layer(middleware::from_fn_with_state(policy, origin_policy_middleware));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::{is_valid_origin, CorsConfig, ValidationError};

/// Methods advertised to browsers.
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Request headers browsers may send.
pub const ALLOWED_HEADERS: &str = "Content-Type, X-User-Id";

/// Preflight cache lifetime in seconds.
pub const MAX_AGE_SECS: &str = "86400";

/// Origin policy middleware state.
pub type OriginPolicyState = Arc<OriginPolicy>;

/// Immutable origin allowlist with a designated default origin.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Vec<HeaderValue>,
    default_origin: HeaderValue,
}

/// CORS headers resolved for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsHeaders {
    pub allow_origin: HeaderValue,
}

impl OriginPolicy {
    /// Builds a policy from exact origins and the default among them.
    pub fn new<I, S>(allowed: I, default_origin: &str) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = Vec::new();
        for origin in allowed {
            let origin = origin.as_ref();
            if !is_valid_origin(origin) {
                return Err(ValidationError::InvalidOrigin(origin.to_string()));
            }
            let value = HeaderValue::from_str(origin)
                .map_err(|_| ValidationError::InvalidOrigin(origin.to_string()))?;
            values.push(value);
        }

        if values.is_empty() {
            return Err(ValidationError::EmptyOriginAllowlist);
        }

        let default_origin = values
            .iter()
            .find(|v| v.as_bytes() == default_origin.as_bytes())
            .cloned()
            .ok_or_else(|| ValidationError::DefaultOriginNotAllowed(default_origin.to_string()))?;

        Ok(Self {
            allowed: values,
            default_origin,
        })
    }

    /// Builds the policy from the `cors` configuration section.
    pub fn from_config(config: &CorsConfig) -> Result<Self, ValidationError> {
        Self::new(config.allowed_origins_list(), &config.default_origin)
    }

    /// Resolves the headers for a request's `Origin`, if any.
    pub fn headers_for(&self, origin: Option<&str>) -> CorsHeaders {
        let allow_origin = origin
            .and_then(|origin| {
                self.allowed
                    .iter()
                    .find(|allowed| allowed.as_bytes() == origin.as_bytes())
            })
            .unwrap_or(&self.default_origin)
            .clone();

        CorsHeaders { allow_origin }
    }
}

impl CorsHeaders {
    /// Writes the four CORS headers, replacing any already present.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.allow_origin.clone(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        headers.insert(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static(MAX_AGE_SECS),
        );
    }
}

/// Answers preflights and stamps CORS headers on every response.
pub async fn origin_policy_middleware(
    State(policy): State<OriginPolicyState>,
    request: Request,
    next: Next,
) -> Response {
    let cors = policy.headers_for(
        request
            .headers()
            .get(header::ORIGIN)
            .and_then(|h| h.to_str().ok()),
    );

    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    cors.apply(response.headers_mut());
    response
}
