//! Application error taxonomy and HTTP mapping.
//!
//! Errors serialize to the wire contract `{ "error": "<message>" }`.
//! Invalid client input maps to 400, oversized bodies to 413, and transform
//! faults (including deadline overruns) to 500.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::minify::TransformError;

/// Wire shape for all error responses.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or wrong-typed request fields. Maps to 400.
    #[error("{0}")]
    InvalidInput(String),

    /// Request body exceeded the configured cap. Maps to 413.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// The external transform rejected the input or failed. Maps to 500:
    /// the declared kind was valid, so this is a server-side fault.
    #[error("{0}")]
    Transform(#[from] TransformError),

    /// The transform exceeded its deadline. Maps to 500.
    #[error("minification timed out after {0} seconds")]
    Timeout(u64),

    /// Anything else that should never reach the client in detail. Maps to 500.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::InvalidInput(rejection.body_text())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Transform(_) | AppError::Timeout(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(%status, "request failed: {message}");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
