//! Persistence port for the theater catalog and its query objects.

use crate::domain::entities::{Movie, Theater, Ticket};
use crate::error::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Filter criteria for ticket lookups.
///
/// Every field is mandatory; the API layer only builds this value once all
/// six query parameters have been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketQuery {
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub price_from: i64,
    pub price_to: i64,
    pub theater_name: String,
    pub movie_name: String,
}

/// Time window for listing the movies being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheaterMoviesQuery {
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
}

/// Movie name for listing the theaters that show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheatersQuery {
    pub name: String,
}

/// Repository interface for read-only catalog queries.
///
/// No ordering, pagination or consistency guarantee is required by callers;
/// an implementation only has to return a sequence or an error.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryTheaterRepository`] - In-process catalog
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_theater.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TheaterRepository: Send + Sync {
    /// Finds tickets matching a date window, price range, theater and movie.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] on store failures.
    async fn get_tickets(&self, query: TicketQuery) -> Result<Vec<Ticket>, RepositoryError>;

    /// Lists the movies shown within a date window.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] on store failures.
    async fn get_theater_movies(
        &self,
        query: TheaterMoviesQuery,
    ) -> Result<Vec<Movie>, RepositoryError>;

    /// Lists the theaters showing a given movie.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] on store failures.
    async fn get_movie_theaters(&self, query: TheatersQuery)
    -> Result<Vec<Theater>, RepositoryError>;
}
