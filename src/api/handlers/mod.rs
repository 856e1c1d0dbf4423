//! HTTP request handlers for API endpoints.

pub mod movies;
pub mod payment;
pub mod theaters;
pub mod tickets;

pub use movies::theater_movies_handler;
pub use payment::add_payment_handler;
pub use theaters::movie_theaters_handler;
pub use tickets::tickets_handler;

use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// Method fallback for every route: any method other than the one the path
/// is bound to is a client error (400), not 405.
pub async fn reject_method(method: Method, uri: Uri) -> AppError {
    AppError::bad_request(format!("method {method} not allowed on {}", uri.path()))
}

/// Serializes `value` as a `200 OK` JSON response.
///
/// Serialization happens before the status line is produced, so an encoding
/// failure still maps to 500.
pub(crate) fn json_ok<T: Serialize>(value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(value).map_err(AppError::Encoding)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
