//! Helpers for turning raw query-string values into typed fields.
//!
//! Query DTOs deserialize every parameter as `Option<String>`, with empty
//! values collapsed to `None`. The helpers below are then applied in a fixed
//! order so that the first missing or malformed parameter is reported.
//!
//! A key repeated in the query string keeps its first value; later ones are
//! ignored (see [`FirstValueQuery`]).

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::AppError;
use crate::utils::rfc822::parse_rfc822;

/// A required query parameter was absent, empty or unparseable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("missing query parameter `{0}`")]
    Missing(&'static str),

    #[error("invalid value for `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("malformed query string: {0}")]
    Malformed(String),
}

/// Query extractor that keeps the first value of each key.
///
/// `?name=Dune&name=Alien` yields `name = "Dune"`. A plain `Query<T>` would
/// reject the repeated key as a duplicate field.
#[derive(Debug)]
pub struct FirstValueQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for FirstValueQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(Self(first_values(pairs)?))
    }
}

/// Builds `T` from decoded query pairs, keeping the first value per key.
pub fn first_values<T: DeserializeOwned>(pairs: Vec<(String, String)>) -> Result<T, ParamError> {
    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(Value::String(value));
    }

    serde_json::from_value(Value::Object(fields)).map_err(|e| ParamError::Malformed(e.to_string()))
}

/// Returns the value of a required text parameter.
pub fn required(name: &'static str, value: Option<String>) -> Result<String, ParamError> {
    value.ok_or(ParamError::Missing(name))
}

/// Parses a required `DD Mon YY HH:MM ZONE` timestamp parameter.
pub fn required_datetime(
    name: &'static str,
    value: Option<String>,
) -> Result<DateTime<Utc>, ParamError> {
    let raw = required(name, value)?;
    parse_rfc822(&raw).map_err(|e| ParamError::Invalid {
        name,
        reason: e.to_string(),
    })
}

/// Parses a required base-10 integer parameter.
pub fn required_int(name: &'static str, value: Option<String>) -> Result<i64, ParamError> {
    let raw = required(name, value)?;
    raw.parse().map_err(|e: std::num::ParseIntError| ParamError::Invalid {
        name,
        reason: e.to_string(),
    })
}
