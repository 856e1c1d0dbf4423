//! Query parameters for `GET /movies`.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use super::params::{ParamError, required_datetime};
use crate::domain::repositories::TheaterMoviesQuery;

/// Raw query string of the theater movies endpoint.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheaterMoviesQueryParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub date_from: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub date_to: Option<String>,
}

impl TryFrom<TheaterMoviesQueryParams> for TheaterMoviesQuery {
    type Error = ParamError;

    fn try_from(params: TheaterMoviesQueryParams) -> Result<Self, Self::Error> {
        let date_from = required_datetime("dateFrom", params.date_from)?;
        let date_to = required_datetime("dateTo", params.date_to)?;

        Ok(TheaterMoviesQuery { date_from, date_to })
    }
}
