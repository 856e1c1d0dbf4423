//! Handler for listing theaters that show a movie.

use axum::{extract::State, response::Response};

use super::json_ok;
use crate::api::dto::params::FirstValueQuery;
use crate::api::dto::theaters::TheatersQueryParams;
use crate::domain::repositories::TheatersQuery;
use crate::error::AppError;
use crate::state::TheatersState;

/// Lists theaters showing the movie named by `name`.
///
/// # Endpoint
///
/// `GET /theaters?name=Dune`
///
/// # Errors
///
/// 400 when `name` is missing or empty, 500 on store failures. A repeated
/// `name` keeps its first value.
pub async fn movie_theaters_handler(
    State(state): State<TheatersState>,
    FirstValueQuery(params): FirstValueQuery<TheatersQueryParams>,
) -> Result<Response, AppError> {
    let query = TheatersQuery::try_from(params)?;

    let theaters = state.theater_service.get_movie_theaters(query).await?;

    json_ok(&theaters)
}
