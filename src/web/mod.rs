//! Web layer for the browser-based workbench.
//!
//! Serves the workbench page via Askama server-side rendering; the page's
//! behavior lives in `static/app.js` and mirrors [`crate::workbench`].
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
