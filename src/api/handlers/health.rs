//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::minify::{self, ContentKind};
use crate::state::AppState;

/// Returns service health status with per-transform checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All transforms operational
/// - **503 Service Unavailable**: One or more transforms failing
///
/// # Components Checked
///
/// Each transform adapter is exercised on a one-line snippet of its format.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "script": { "status": "ok", "message": "12 -> 8 bytes" },
///     "stylesheet": { "status": "ok", "message": "21 -> 16 bytes" },
///     "markup": { "status": "ok", "message": "18 -> 14 bytes" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(_state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let script_check = check_transform(ContentKind::Script, "var answer = 42;");
    let stylesheet_check = check_transform(ContentKind::Stylesheet, ".a {\n  color: black;\n}");
    let markup_check = check_transform(ContentKind::Markup, "<p>  health  </p>");

    let all_healthy = script_check.status == "ok"
        && stylesheet_check.status == "ok"
        && markup_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            script: script_check,
            stylesheet: stylesheet_check,
            markup: markup_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Runs one transform on a canned snippet and reports the size change.
fn check_transform(kind: ContentKind, snippet: &str) -> CheckStatus {
    match minify::minify(kind, snippet) {
        Ok(outcome) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "{} -> {} bytes",
                outcome.original_size, outcome.minified_size
            )),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Transform error: {e}")),
        },
    }
}
