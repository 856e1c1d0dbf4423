//! Handler for listing movies shown in a time window.

use axum::{extract::State, response::Response};

use super::json_ok;
use crate::api::dto::params::FirstValueQuery;
use crate::api::dto::movies::TheaterMoviesQueryParams;
use crate::domain::repositories::TheaterMoviesQuery;
use crate::error::AppError;
use crate::state::TheatersState;

/// Lists movies shown between `dateFrom` and `dateTo`.
///
/// # Endpoint
///
/// `GET /movies?dateFrom=01 Jan 23 00:00 UTC&dateTo=31 Jan 23 23:59 UTC`
///
/// # Response
///
/// JSON array of `{"name": ...}` objects.
///
/// # Errors
///
/// 400 on a missing or malformed date, 500 on store failures.
pub async fn theater_movies_handler(
    State(state): State<TheatersState>,
    FirstValueQuery(params): FirstValueQuery<TheaterMoviesQueryParams>,
) -> Result<Response, AppError> {
    let query = TheaterMoviesQuery::try_from(params)?;

    let movies = state.theater_service.get_theater_movies(query).await?;

    json_ok(&movies)
}
