//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5001`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BODY_LIMIT_BYTES` - Maximum request body size (default: 20 MiB)
//! - `TRANSFORM_TIMEOUT_SECONDS` - Deadline for a single minification run
//!   (default: 30)
//! - `CORS_ALLOWED_ORIGINS` - `*` or a comma-separated origin allow-list
//!   (default: `*`)

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Default request body cap.
const DEFAULT_BODY_LIMIT_BYTES: usize = 20 * 1024 * 1024;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum accepted request body size in bytes.
    pub body_limit_bytes: usize,
    /// Deadline in seconds for a single transform run.
    pub transform_timeout_seconds: u64,
    /// CORS origins. A single `*` entry means any origin; otherwise each
    /// entry is matched exactly against the request `Origin` header.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5001".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let body_limit_bytes = env::var("BODY_LIMIT_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BODY_LIMIT_BYTES);

        let transform_timeout_seconds = env::var("TRANSFORM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let cors_allowed_origins = Self::load_cors_origins();

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            body_limit_bytes,
            transform_timeout_seconds,
            cors_allowed_origins,
        })
    }

    /// Parses `CORS_ALLOWED_ORIGINS` as a comma-separated list.
    ///
    /// Unset or empty means `*`: the endpoint is a public paste target by
    /// default, and deployments scope it down explicitly.
    fn load_cors_origins() -> Vec<String> {
        let raw = match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(v) if !v.trim().is_empty() => v,
            _ => return vec!["*".to_string()],
        };

        raw.split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `body_limit_bytes` is zero or above 256 MiB
    /// - `transform_timeout_seconds` is zero or above 600
    /// - a CORS origin is neither `*` nor an `http(s)://` origin
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.body_limit_bytes == 0 {
            anyhow::bail!("BODY_LIMIT_BYTES must be greater than 0");
        }

        if self.body_limit_bytes > 256 * 1024 * 1024 {
            anyhow::bail!(
                "BODY_LIMIT_BYTES is too large (max: 268435456), got {}",
                self.body_limit_bytes
            );
        }

        if self.transform_timeout_seconds == 0 || self.transform_timeout_seconds > 600 {
            anyhow::bail!(
                "TRANSFORM_TIMEOUT_SECONDS must be between 1 and 600, got {}",
                self.transform_timeout_seconds
            );
        }

        if self.cors_allowed_origins.is_empty() {
            anyhow::bail!("CORS_ALLOWED_ORIGINS must not be empty");
        }

        for origin in &self.cors_allowed_origins {
            if origin == "*" {
                if self.cors_allowed_origins.len() > 1 {
                    anyhow::bail!("CORS_ALLOWED_ORIGINS cannot mix '*' with explicit origins");
                }
                continue;
            }

            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                anyhow::bail!(
                    "CORS_ALLOWED_ORIGINS entries must be http(s) origins, got '{}'",
                    origin
                );
            }
        }

        Ok(())
    }

    /// Returns whether any origin is allowed.
    pub fn is_cors_permissive(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }

    /// Deadline for a single transform run.
    pub fn transform_timeout(&self) -> Duration {
        Duration::from_secs(self.transform_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Body limit: {} bytes", self.body_limit_bytes);
        tracing::info!(
            "  Transform timeout: {}s",
            self.transform_timeout_seconds
        );

        if self.is_cors_permissive() {
            tracing::info!("  CORS: any origin");
        } else {
            tracing::info!("  CORS: {}", self.cors_allowed_origins.join(", "));
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
