//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::workbench_handler;
use axum::{Router, routing::get};

/// Page routes, no authentication.
///
/// # Endpoints
///
/// - `GET /` - The minification workbench
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(workbench_handler))
}
