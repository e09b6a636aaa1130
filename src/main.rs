//! doks-hello entry point.
//!
//! Initializes tracing, resolves configuration from the environment, binds the
//! listener and serves until the process is terminated.

use doks_hello::config::{env_lookup, resolve_log_format, AppConfig};
use doks_hello::logging::{init_tracing, log_filter};
use doks_hello::{create_router, http, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging first so configuration errors are reported through it
    let log_format = resolve_log_format(&env_lookup);
    init_tracing(&log_filter(), log_format);

    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    tracing::info!(
        version = %config.version,
        port = config.http.port,
        "Loaded configuration"
    );

    let listener = http::bind(&config).await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to bind listener");
    })?;

    let app = create_router(AppState::new(config));

    http::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "Server stopped");
    })?;

    Ok(())
}
