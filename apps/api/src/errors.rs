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
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Text extraction error: {0}")]
    Extraction(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    /// A server-side failure reported to the client under an endpoint-specific message.
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Replaces the client-facing message of a 5xx failure. Client errors pass through.
    pub fn with_public_message(self, message: &'static str) -> Self {
        match self {
            AppError::NotFound(_) | AppError::Validation(_) | AppError::PayloadTooLarge(_) => {
                self
            }
            AppError::Upstream { source, .. } => AppError::Upstream { message, source },
            other => AppError::Upstream {
                message,
                source: Box::new(other),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Database(_)
            | AppError::Extraction(_)
            | AppError::Internal(_)
            | AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
            AppError::Upstream { source, .. } => source.code(),
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::NotFound(msg) | AppError::Validation(msg) | AppError::PayloadTooLarge(msg) => {
                msg.clone()
            }
            AppError::Database(_) => "A database error occurred".to_string(),
            AppError::Extraction(_) => "Could not read the uploaded document".to_string(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
            AppError::Upstream { message, .. } => message.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self);
        }

        let body = Json(json!({
            "error": self.public_message(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}
