//! # Minify Service
//!
//! A code minification service for JavaScript, CSS and HTML built with Axum.
//!
//! ## Architecture
//!
//! - **Engine** ([`minify`]) - Stateless kind-to-transform dispatch over
//!   three adapter modules (oxc, lightningcss, minify-html)
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - The browser workbench page
//! - **Workbench** ([`workbench`]) - The client workflow as an explicit,
//!   gateway-injected state object, shared by the CLI and tests
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service (defaults to 0.0.0.0:5001)
//! cargo run
//!
//! # Minify a file from the command line
//! cargo run --bin minifyctl -- file app.js
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod error;
pub mod minify;
pub mod state;
pub mod utils;
pub mod workbench;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::error::AppError;
    pub use crate::minify::{ContentKind, MinifyOutcome, TransformError};
    pub use crate::state::AppState;
    pub use crate::workbench::{LocalGateway, MinifyGateway, Workbench};
}
