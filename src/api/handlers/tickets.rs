//! Handler for ticket search.

use axum::{extract::State, response::Response};

use super::json_ok;
use crate::api::dto::params::FirstValueQuery;
use crate::api::dto::tickets::TicketsQueryParams;
use crate::domain::repositories::TicketQuery;
use crate::error::AppError;
use crate::state::TheatersState;

/// Lists tickets matching a date window, price range, theater and movie.
///
/// # Endpoint
///
/// `GET /tickets`
///
/// # Query Parameters
///
/// All required, checked in this order:
///
/// - `dateFrom`, `dateTo`: `DD Mon YY HH:MM ZONE` (e.g. `02 Jan 06 15:04 MST`)
/// - `priceFrom`, `priceTo`: base-10 integers
/// - `movieTheater`: theater name
/// - `name`: movie name
///
/// A repeated key keeps its first value.
///
/// # Response
///
/// JSON array of tickets:
///
/// ```json
/// [
///   {
///     "showingId": 1,
///     "dateStart": "2023-01-01T12:00:00Z",
///     "dateEnd": "2023-01-01T14:35:00Z",
///     "price": 25,
///     "movieName": "Dune",
///     "theaterName": "Imax",
///     "availableSeats": "A1,A2"
///   }
/// ]
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on the first missing or unparseable parameter;
/// the store is not called in that case. Returns 500 on store failures.
pub async fn tickets_handler(
    State(state): State<TheatersState>,
    FirstValueQuery(params): FirstValueQuery<TicketsQueryParams>,
) -> Result<Response, AppError> {
    let query = TicketQuery::try_from(params)?;

    let tickets = state.theater_service.get_tickets(query).await?;

    json_ok(&tickets)
}
