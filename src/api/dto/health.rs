//! DTOs for the health check endpoint.

use serde::Serialize;

/// Overall health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Per-transform component checks.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub script: CheckStatus,
    pub stylesheet: CheckStatus,
    pub markup: CheckStatus,
}

/// Individual component check result.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    /// `ok` or `error`.
    pub status: String,
    pub message: Option<String>,
}
