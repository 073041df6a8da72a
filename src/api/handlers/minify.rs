//! Handler for the minification endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::minify::{MinifyRequest, MinifyResponse};
use crate::error::AppError;
use crate::minify;
use crate::state::AppState;

/// Minifies the submitted source text.
///
/// # Endpoint
///
/// `POST /minify`
///
/// # Request Body
///
/// ```json
/// {
///   "code": "function add(a, b) { return a + b; }",
///   "type": "js"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "minified": "function add(n,r){return n+r}",
///   "originalSize": 36,
///   "minifiedSize": 29
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: `code` missing or not a string, `type` missing or
///   not one of `js`/`css`/`html`, or the body is not valid JSON.
/// - **413 Payload Too Large**: body exceeds the configured cap.
/// - **500 Internal Server Error**: the transform rejected the input or
///   exceeded its deadline. The error body carries the transform message.
///
/// # Execution
///
/// Transforms are CPU-bound, so each run is moved to a blocking worker
/// thread and raced against the configured deadline.
pub async fn minify_handler(
    State(state): State<AppState>,
    payload: Result<Json<MinifyRequest>, JsonRejection>,
) -> Result<Json<MinifyResponse>, AppError> {
    let Json(MinifyRequest { code, kind }) = payload?;

    let deadline = state.transform_timeout;
    let outcome = tokio::time::timeout(
        deadline,
        tokio::task::spawn_blocking(move || minify::minify(kind, &code)),
    )
    .await
    .map_err(|_| AppError::Timeout(deadline.as_secs()))?
    .map_err(|e| AppError::internal(format!("minification task failed: {e}")))??;

    tracing::debug!(
        kind = %kind,
        original_size = outcome.original_size,
        minified_size = outcome.minified_size,
        "minified"
    );

    Ok(Json(MinifyResponse::from(outcome)))
}
