//! Root page handler.

use axum::extract::State;

use crate::state::AppState;

/// Prefix of the root greeting, followed by the configured version.
pub const GREETING_PREFIX: &str = "Hello from Flask on DOKS ";

/// Render the greeting for a version string.
pub fn greeting(version: &str) -> String {
    format!("{GREETING_PREFIX}{version}!\n")
}

/// Root handler: greets with the version resolved at startup.
pub async fn index(State(state): State<AppState>) -> String {
    greeting(&state.config.version)
}
