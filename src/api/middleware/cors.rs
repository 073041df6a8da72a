//! CORS middleware for the API routes.
//!
//! The endpoint is callable from other origins; the allow-list narrows
//! that down per deployment.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer from the configured origin list.
///
/// A single `*` entry allows any origin. Otherwise, each entry is matched
/// exactly against the request `Origin` header. Entries are validated at
/// startup by [`crate::config::Config::validate`]; origins that still fail
/// to parse as header values are skipped.
///
/// Only `GET` and `POST` with a `content-type` header are ever needed by
/// the API surface.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    cors.allow_origin(origins)
}
