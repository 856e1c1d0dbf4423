//! Theater catalog query service.

use std::sync::Arc;
use std::time::Duration;

use super::with_deadline;
use crate::domain::entities::{Movie, Theater, Ticket};
use crate::domain::repositories::{
    TheaterMoviesQuery, TheaterRepository, TheatersQuery, TicketQuery,
};
use crate::error::RepositoryError;

/// Runs catalog queries against the theater store.
pub struct TheaterService {
    repository: Arc<dyn TheaterRepository>,
    timeout: Duration,
}

impl TheaterService {
    /// Creates a new theater service.
    ///
    /// `timeout` bounds every call into the repository.
    pub fn new(repository: Arc<dyn TheaterRepository>, timeout: Duration) -> Self {
        Self {
            repository,
            timeout,
        }
    }

    /// Finds tickets matching the query.
    ///
    /// # Errors
    ///
    /// Returns the repository error, or [`RepositoryError::Timeout`].
    pub async fn get_tickets(&self, query: TicketQuery) -> Result<Vec<Ticket>, RepositoryError> {
        let tickets = with_deadline(self.timeout, self.repository.get_tickets(query)).await?;
        tracing::debug!(count = tickets.len(), "Tickets fetched");
        Ok(tickets)
    }

    /// Lists the movies shown in the query's date window.
    ///
    /// # Errors
    ///
    /// Returns the repository error, or [`RepositoryError::Timeout`].
    pub async fn get_theater_movies(
        &self,
        query: TheaterMoviesQuery,
    ) -> Result<Vec<Movie>, RepositoryError> {
        let movies = with_deadline(self.timeout, self.repository.get_theater_movies(query)).await?;
        tracing::debug!(count = movies.len(), "Movies fetched");
        Ok(movies)
    }

    /// Lists the theaters showing the queried movie.
    ///
    /// # Errors
    ///
    /// Returns the repository error, or [`RepositoryError::Timeout`].
    pub async fn get_movie_theaters(
        &self,
        query: TheatersQuery,
    ) -> Result<Vec<Theater>, RepositoryError> {
        let theaters = with_deadline(self.timeout, self.repository.get_movie_theaters(query)).await?;
        tracing::debug!(count = theaters.len(), "Theaters fetched");
        Ok(theaters)
    }
}
