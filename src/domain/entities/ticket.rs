//! Read-only projections returned by the theater catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchasable ticket for one showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub showing_id: i64,
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
    pub price: i64,
    pub movie_name: String,
    pub theater_name: String,
    pub available_seats: String,
}

/// A movie known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub name: String,
}

impl Movie {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A theater known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theater {
    pub name: String,
}

impl Theater {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
