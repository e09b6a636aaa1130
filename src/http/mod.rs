//! HTTP server module.
//!
//! Plain HTTP only: TLS termination is left to the ingress or load balancer in
//! front of the service. Binding is split from serving so the bound address
//! (including an OS-assigned port) is known before requests are accepted.

mod server;

pub use server::{bind, serve, ServerError};
