//! doks-hello: a version-stamped greeting service and health probe target.
//!
//! Serves `GET /` with a greeting that carries the deployed version and
//! `GET /healthz` for liveness/readiness probes. Configuration comes from the
//! environment and is fixed for the lifetime of the process.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
