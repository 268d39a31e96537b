use crate::storage::StoreError;
use crate::transport::http::types::json_message;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

/// Errors a handler can answer with. Rendered as an envelope with `status: "error"`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mapping for list, get and delete: store failures are server errors.
    pub fn from_read(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            other => {
                warn!(error = %other, "Store operation failed");
                ApiError::Internal(other.to_string())
            }
        }
    }

    /// Mapping for create and update: store failures are reported as client errors.
    pub fn from_write(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            other => {
                warn!(error = %other, "Store write rejected");
                ApiError::BadRequest(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_message(self.status_code(), self.to_string())
    }
}
