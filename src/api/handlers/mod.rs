//! HTTP request handlers for API endpoints.

pub mod health;
pub mod minify;

pub use health::health_handler;
pub use minify::minify_handler;
