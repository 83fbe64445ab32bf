use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Bodies are plain text. Storage failures carry the status and message the
/// endpoint answers with; the underlying error is only logged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unprocessable entity: {0}")]
    Unprocessable(&'static str),

    #[error("pogs not found")]
    PogNotFound,

    #[error("Storage error during {operation}: {source}")]
    Storage {
        operation: &'static str,
        status: StatusCode,
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Storage failure answered as 404 "Not found" (list, get, create).
    pub fn lookup_failed(operation: &'static str, source: anyhow::Error) -> Self {
        AppError::Storage {
            operation,
            status: StatusCode::NOT_FOUND,
            message: "Not found",
            source,
        }
    }

    /// Storage failure answered as 500 "internal server error" (update).
    pub fn internal(operation: &'static str, source: anyhow::Error) -> Self {
        AppError::Storage {
            operation,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "internal server error",
            source,
        }
    }

    /// Storage failure answered as 500 "Not found" (delete).
    pub fn delete_failed(operation: &'static str, source: anyhow::Error) -> Self {
        AppError::Storage {
            operation,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Not found",
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, *msg),
            AppError::PogNotFound => (StatusCode::NOT_FOUND, "pogs not found"),
            AppError::Storage {
                operation,
                status,
                message,
                source,
            } => {
                tracing::error!("Storage error during {operation}: {source:?}");
                (*status, *message)
            }
        };

        (status, message).into_response()
    }
}
