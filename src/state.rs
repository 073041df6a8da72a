use std::time::Duration;

/// Shared application state injected into handlers.
///
/// The minification engine itself is stateless, so the state carries only
/// the knobs handlers need per request.
#[derive(Clone)]
pub struct AppState {
    /// Deadline for a single transform run.
    pub transform_timeout: Duration,
}

impl AppState {
    pub fn new(transform_timeout: Duration) -> Self {
        Self { transform_timeout }
    }
}
