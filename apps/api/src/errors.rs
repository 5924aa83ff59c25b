use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body contained no bytes. Expected during normal operation
    /// (misbehaving clients); never reaches the extractor.
    #[error("No file received")]
    EmptyInput,

    /// The uploaded bytes could not be parsed as a PDF, or a page failed
    /// during extraction. Distinct from an empty-but-valid PDF.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::EmptyInput => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InvalidDocument(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
