//! Error types shared across layers and their HTTP mapping.
//!
//! Every failure is reported to the client through the status code alone:
//!
//! - [`AppError::BadRequest`] → `400 Bad Request`
//! - [`AppError::Repository`] → `500 Internal Server Error`
//! - [`AppError::Encoding`] → `500 Internal Server Error`
//!
//! The response body is always empty. The reason is written to the log instead.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use validator::ValidationErrors;

use crate::api::dto::params::ParamError;

/// Failure reported by a persistence port implementation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The call did not complete before the configured deadline.
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    /// Any other failure inside the store.
    #[error("store failure: {0}")]
    Internal(String),
}

/// Error returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client input error: wrong method, missing or malformed parameter, bad body.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A successful result could not be serialized.
    #[error("failed to encode response: {0}")]
    Encoding(#[source] serde_json::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Repository(_) | AppError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ParamError> for AppError {
    fn from(err: ParamError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        Self::bad_request(format!("validation failed: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::BadRequest { message } => {
                tracing::warn!(status = status.as_u16(), "Rejected request: {}", message);
            }
            AppError::Repository(err) => {
                tracing::error!(status = status.as_u16(), error = %err, "Persistence call failed");
            }
            AppError::Encoding(err) => {
                tracing::error!(status = status.as_u16(), error = %err, "Response encoding failed");
            }
        }

        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("missing dateFrom").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(RepositoryError::Unavailable("down".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(RepositoryError::Timeout(Duration::from_millis(5))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_param_error_is_bad_request() {
        let err = AppError::from(ParamError::Missing("priceTo"));
        assert!(matches!(err, AppError::BadRequest { .. }));
        assert!(err.to_string().contains("priceTo"));
    }

    #[tokio::test]
    async fn test_response_has_empty_body() {
        let response =
            AppError::from(RepositoryError::Internal("boom".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }
}
