//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`          - Workbench page
//! - `POST /minify`    - Minification endpoint
//! - `GET  /health`    - Per-transform health checks
//! - `/static/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API routes
//! - **CORS** - Configurable origin allow-list on the API routes
//! - **Body cap** - Request body limit on the API routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - source of the body cap and CORS origin list
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let api_router = api::routes::routes()
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors::layer(&config.cors_allowed_origins))
        .layer(rate_limit::layer());

    let router = Router::new()
        .merge(web::routes::routes())
        .merge(api_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
