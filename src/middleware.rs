//! Access logging for the two routes this service answers.
//!
//! Every request runs inside a `request` span tagged with a UUID v4 and the
//! kind of traffic it is. Orchestrators hit `/healthz` every few seconds per
//! replica, so successful probes complete at `debug` and stay out of the
//! default `info` log; greetings and misses complete at `info`, and anything
//! that ends in a server error at `warn`.

use std::time::Instant;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, Level};
use uuid::Uuid;

/// Path answered by the health probe handler
pub const HEALTH_PATH: &str = "/healthz";

/// What a request is, judged by its path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traffic {
    /// Liveness/readiness probe
    Probe,
    /// Root greeting
    Greeting,
    /// Anything the router does not know
    Other,
}

impl Traffic {
    pub fn classify(path: &str) -> Self {
        match path {
            HEALTH_PATH => Traffic::Probe,
            "/" => Traffic::Greeting,
            _ => Traffic::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Traffic::Probe => "probe",
            Traffic::Greeting => "greeting",
            Traffic::Other => "other",
        }
    }

    /// Level the completion event is logged at.
    pub fn completion_level(self, status: StatusCode) -> Level {
        if status.is_server_error() {
            Level::WARN
        } else if self == Traffic::Probe && status.is_success() {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

/// Outermost layer: wraps the handler and the not-found fallback in one span.
pub async fn access_log_layer(request: Request, next: Next) -> Response {
    let traffic = Traffic::classify(request.uri().path());
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        traffic = traffic.as_str(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    async move {
        let started = Instant::now();
        let response = next.run(request).await;
        let status = response.status();
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        let level = traffic.completion_level(status);
        if level == Level::DEBUG {
            tracing::debug!(status = status.as_u16(), latency_ms, "Request completed");
        } else if level == Level::WARN {
            tracing::warn!(status = status.as_u16(), latency_ms, "Request completed");
        } else {
            tracing::info!(status = status.as_u16(), latency_ms, "Request completed");
        }

        response
    }
    .instrument(span)
    .await
}
