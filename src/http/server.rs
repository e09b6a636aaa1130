//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind the listener described by `config.http`.
///
/// Fails fast when the port is already in use or cannot be bound; there is
/// no retry.
pub async fn bind(config: &AppConfig) -> Result<TcpListener, ServerError> {
    let addr = config.http.bind_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already bound listener.
///
/// This function blocks until the server stops, which in practice means until
/// the process is terminated.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!(%addr, "Starting HTTP server");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_port(port: u16) -> AppConfig {
        let mut config = AppConfig::default();
        config.http.port = port;
        config
    }

    #[tokio::test]
    async fn bind_port_zero_assigns_a_port() {
        let listener = bind(&config_with_port(0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert_ne!(addr.port(), 0);
        assert!(addr.ip().is_unspecified());
    }

    #[tokio::test]
    async fn bind_fails_when_port_in_use() {
        let occupied = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
        let port = occupied.local_addr().unwrap().port();

        let err = bind(&config_with_port(port)).await.unwrap_err();
        match err {
            ServerError::Bind { addr, .. } => assert_eq!(addr, format!("0.0.0.0:{port}")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
