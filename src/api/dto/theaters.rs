//! Query parameters for `GET /theaters`.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use super::params::{ParamError, required};
use crate::domain::repositories::TheatersQuery;

/// Raw query string of the movie theaters endpoint.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct TheatersQueryParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,
}

impl TryFrom<TheatersQueryParams> for TheatersQuery {
    type Error = ParamError;

    fn try_from(params: TheatersQueryParams) -> Result<Self, Self::Error> {
        Ok(TheatersQuery {
            name: required("name", params.name)?,
        })
    }
}
