//! Query parameters for `GET /tickets`.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use super::params::{ParamError, required, required_datetime, required_int};
use crate::domain::repositories::TicketQuery;

/// Raw query string of the tickets endpoint.
///
/// Empty values are treated the same as absent ones.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketsQueryParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub date_from: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub date_to: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub price_from: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub price_to: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub movie_theater: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,
}

impl TryFrom<TicketsQueryParams> for TicketQuery {
    type Error = ParamError;

    /// Checks `dateFrom`, `dateTo`, `priceFrom`, `priceTo`, `movieTheater`
    /// and `name`, in that order.
    fn try_from(params: TicketsQueryParams) -> Result<Self, Self::Error> {
        let date_from = required_datetime("dateFrom", params.date_from)?;
        let date_to = required_datetime("dateTo", params.date_to)?;
        let price_from = required_int("priceFrom", params.price_from)?;
        let price_to = required_int("priceTo", params.price_to)?;
        let theater_name = required("movieTheater", params.movie_theater)?;
        let movie_name = required("name", params.name)?;

        Ok(TicketQuery {
            date_from,
            date_to,
            price_from,
            price_to,
            theater_name,
            movie_name,
        })
    }
}
