//! Workbench page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the workbench page.
///
/// Renders `templates/index.html`: source and result panes, the type
/// selector, drop zone, and the minify/copy/download controls wired up by
/// `static/app.js`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct WorkbenchTemplate {
    pub version: &'static str,
}

/// Renders the workbench page.
///
/// # Endpoint
///
/// `GET /`
pub async fn workbench_handler() -> impl IntoResponse {
    WorkbenchTemplate {
        version: env!("CARGO_PKG_VERSION"),
    }
}
