//! Showing entity: one screening of a movie in a theater.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Ticket;

/// A scheduled screening, as stored in the catalog.
///
/// Catalog files are JSON arrays of showings:
///
/// ```json
/// [
///   {
///     "id": 1,
///     "movieName": "Dune",
///     "theaterName": "Imax",
///     "dateStart": "2023-01-01T12:00:00Z",
///     "dateEnd": "2023-01-01T14:35:00Z",
///     "price": 25,
///     "availableSeats": "A1,A2,B7"
///   }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showing {
    pub id: i64,
    pub movie_name: String,
    pub theater_name: String,
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
    pub price: i64,
    #[serde(default)]
    pub available_seats: String,
}

impl Showing {
    /// Projects the showing into the ticket view returned to clients.
    pub fn to_ticket(&self) -> Ticket {
        Ticket {
            showing_id: self.id,
            date_start: self.date_start,
            date_end: self.date_end,
            price: self.price,
            movie_name: self.movie_name.clone(),
            theater_name: self.theater_name.clone(),
            available_seats: self.available_seats.clone(),
        }
    }
}
