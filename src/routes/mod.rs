//! HTTP route handlers.
//!
//! The route table is fixed: `GET /` greets with the configured version and
//! `GET /healthz` answers probes. Every other path, and every other method on
//! those two paths, is answered with 404 by [`not_found`].
//!
//! [`access_log_layer`] wraps the whole table, fallback included, so a 404 is
//! logged with the same request span as a greeting or a probe.

pub mod health;
pub mod home;

use axum::{
    http::header::{HeaderValue, CACHE_CONTROL},
    http::{Method, Uri},
    middleware,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::error::AppError;
use crate::middleware::{access_log_layer, HEALTH_PATH};
use crate::state::AppState;

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound {
        method,
        path: uri.path().to_string(),
    }
}

/// Creates the Axum router with both routes and the not-found fallback.
pub fn create_router(state: AppState) -> Router {
    let home_routes = Router::new().route("/", get(home::index).fallback(not_found));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(HEALTH_PATH, get(health::healthz).fallback(not_found))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(access_log_layer))
}
