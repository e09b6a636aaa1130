//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER, ENV_RUST_LOG};

/// Log filter with priority: RUST_LOG > default.
pub fn log_filter() -> String {
    std::env::var(ENV_RUST_LOG)
        .ok()
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_tracing(filter: &str, format: LogFormat) {
    let text = (format == LogFormat::Text).then(|| tracing_subscriber::fmt::layer());
    let json = (format == LogFormat::Json).then(|| tracing_subscriber::fmt::layer().json());

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(text)
        .with(json)
        .init();
}
