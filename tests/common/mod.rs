#![allow(dead_code)]

use std::time::Duration;

use minify_service::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new(Duration::from_secs(30))
}

pub fn create_test_state_with_timeout(timeout: Duration) -> AppState {
    AppState::new(timeout)
}
