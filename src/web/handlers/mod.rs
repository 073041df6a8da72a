//! HTML template rendering handlers.

mod workbench;

pub use workbench::workbench_handler;
