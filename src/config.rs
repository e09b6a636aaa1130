//! Configuration loading and constants.
//!
//! All settings come from environment variables and are resolved exactly once
//! at startup. `AppConfig` is the root configuration struct; it is shared
//! read-only with every request handler for the lifetime of the process.

use const_format::formatcp;
use std::num::ParseIntError;

// =============================================================================
// Environment Variables
// =============================================================================

/// Version string interpolated into the greeting
pub const ENV_APP_VERSION: &str = "APP_VERSION";

/// TCP port to listen on
pub const ENV_PORT: &str = "PORT";

/// Log output format ("text" or "json")
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Log filter directives
pub const ENV_RUST_LOG: &str = "RUST_LOG";

// =============================================================================
// Defaults
// =============================================================================

/// Version reported when APP_VERSION is unset or empty
pub const DEFAULT_VERSION: &str = "Final Version-Final-v3";

/// Listen port when PORT is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Listen on all interfaces; TLS and routing live in the ingress in front of us
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str =
    formatcp!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME"));

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Probe responses must never be served from an intermediary cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Version string shown by the root route
    pub version: String,
    /// HTTP listener configuration
    pub http: HttpServerConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl HttpServerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a format name. Unknown names fall back to text.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            http: HttpServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create a configuration with the given version and defaults elsewhere.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Resolve the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            version: resolve_version(&lookup),
            http: HttpServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: resolve_port(&lookup)?,
            },
        })
    }
}

/// Process environment lookup; unset and non-UTF-8 variables read as absent.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// APP_VERSION, or the default when unset or empty.
pub fn resolve_version<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_APP_VERSION)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_VERSION.to_string())
}

/// PORT parsed as a base-10 port number, or the default when unset.
///
/// A value that is present but not a valid port is an error; it never falls
/// back to the default.
pub fn resolve_port<F>(lookup: &F) -> Result<u16, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(ENV_PORT) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|source| ConfigError::InvalidPort { value, source }),
    }
}

/// LOG_FORMAT, defaulting to text.
///
/// Resolved on its own, ahead of `AppConfig`, because the subscriber has to be
/// installed before a configuration error can be logged.
pub fn resolve_log_format<F>(lookup: &F) -> LogFormat
where
    F: Fn(&str) -> Option<String>,
{
    LogFormat::from_name(&lookup(ENV_LOG_FORMAT).unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
