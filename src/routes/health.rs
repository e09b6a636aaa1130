//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness/readiness probe that returns 200 OK when the
//! process is running. Used by Kubernetes, load balancers and ingress
//! controllers to decide whether to route traffic to this instance.

/// Health check handler.
///
/// Independent of configuration; it only proves the process can answer HTTP.
pub async fn healthz() -> &'static str {
    "ok\n"
}
