//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `origin_policy` - CORS headers and preflight handling
//! - `head_guard` - 404 for `HEAD`, which axum would route to `GET` handlers

pub mod head_guard;
pub mod origin_policy;

pub use head_guard::reject_head;
pub use origin_policy::{origin_policy_middleware, CorsHeaders, OriginPolicy, OriginPolicyState};
