//! API route configuration.

use crate::api::handlers::{health_handler, minify_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /minify` - Minify a piece of JavaScript, CSS or HTML
/// - `GET  /health` - Per-transform health checks
///
/// Body capping, CORS and rate limiting are layered on by the top-level
/// router in [`crate::routes`].
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/minify", post(minify_handler))
        .route("/health", get(health_handler))
}
