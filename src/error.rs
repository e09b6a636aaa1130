use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};

/// Body returned for every unknown route or method
pub const NOT_FOUND_BODY: &str = "Not Found\n";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No route for {method} {path}")]
    NotFound { method: Method, path: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound { .. } => {
                tracing::debug!("{}", self);
                (
                    StatusCode::NOT_FOUND,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    NOT_FOUND_BODY,
                )
                    .into_response()
            }
        }
    }
}
