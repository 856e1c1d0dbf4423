//! In-memory implementation of the theater catalog.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Movie, Showing, Theater, Ticket};
use crate::domain::repositories::{
    TheaterMoviesQuery, TheaterRepository, TheatersQuery, TicketQuery,
};
use crate::error::RepositoryError;

/// Catalog of showings held in process memory.
///
/// Query semantics:
///
/// - tickets: exact theater and movie name, `date_from <= start <= date_to`,
///   `price_from <= price <= price_to`, ordered by start time then showing id
/// - movies: distinct names of movies starting inside the window, sorted
/// - theaters: distinct names of theaters showing the movie, sorted
///
/// Cloning shares the underlying storage.
#[derive(Default, Clone)]
pub struct InMemoryTheaterRepository {
    showings: Arc<RwLock<Vec<Showing>>>,
}

impl InMemoryTheaterRepository {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-filled with `showings`.
    pub fn with_showings(showings: Vec<Showing>) -> Self {
        Self {
            showings: Arc::new(RwLock::new(showings)),
        }
    }

    /// Loads a catalog from a JSON file holding an array of showings.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the file cannot be read and
    /// [`RepositoryError::Internal`] if it is not a valid showing array.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path).await.map_err(|e| {
            RepositoryError::Unavailable(format!("cannot read {}: {e}", path.display()))
        })?;
        let showings: Vec<Showing> = serde_json::from_slice(&raw).map_err(|e| {
            RepositoryError::Internal(format!("invalid catalog {}: {e}", path.display()))
        })?;

        tracing::info!(path = %path.display(), showings = showings.len(), "Catalog loaded");
        Ok(Self::with_showings(showings))
    }

    /// Adds a showing to the catalog.
    pub async fn insert(&self, showing: Showing) {
        self.showings.write().await.push(showing);
    }
}

#[async_trait]
impl TheaterRepository for InMemoryTheaterRepository {
    async fn get_tickets(&self, query: TicketQuery) -> Result<Vec<Ticket>, RepositoryError> {
        let showings = self.showings.read().await;

        let mut matching: Vec<&Showing> = showings
            .iter()
            .filter(|s| s.theater_name == query.theater_name && s.movie_name == query.movie_name)
            .filter(|s| s.date_start >= query.date_from && s.date_start <= query.date_to)
            .filter(|s| s.price >= query.price_from && s.price <= query.price_to)
            .collect();
        matching.sort_by_key(|s| (s.date_start, s.id));

        Ok(matching.into_iter().map(Showing::to_ticket).collect())
    }

    async fn get_theater_movies(
        &self,
        query: TheaterMoviesQuery,
    ) -> Result<Vec<Movie>, RepositoryError> {
        let showings = self.showings.read().await;

        let names: BTreeSet<&str> = showings
            .iter()
            .filter(|s| s.date_start >= query.date_from && s.date_start <= query.date_to)
            .map(|s| s.movie_name.as_str())
            .collect();

        Ok(names.into_iter().map(Movie::new).collect())
    }

    async fn get_movie_theaters(
        &self,
        query: TheatersQuery,
    ) -> Result<Vec<Theater>, RepositoryError> {
        let showings = self.showings.read().await;

        let names: BTreeSet<&str> = showings
            .iter()
            .filter(|s| s.movie_name == query.name)
            .map(|s| s.theater_name.as_str())
            .collect();

        Ok(names.into_iter().map(Theater::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_empty_catalog_returns_empty_lists() {
        let repo = InMemoryTheaterRepository::new();

        let theaters = repo
            .get_movie_theaters(TheatersQuery {
                name: "Dune".to_string(),
            })
            .await
            .unwrap();

        assert!(theaters.is_empty());
    }

    #[tokio::test]
    async fn test_insert_makes_showing_visible() {
        let repo = InMemoryTheaterRepository::new();
        repo.insert(Showing {
            id: 1,
            movie_name: "Dune".to_string(),
            theater_name: "Imax".to_string(),
            date_start: Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap(),
            date_end: Utc.with_ymd_and_hms(2023, 1, 1, 14, 0, 0).unwrap(),
            price: 20,
            available_seats: String::new(),
        })
        .await;

        let theaters = repo
            .get_movie_theaters(TheatersQuery {
                name: "Dune".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(theaters, vec![Theater::new("Imax")]);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_unavailable() {
        let result = InMemoryTheaterRepository::load("/nonexistent/catalog.json").await;

        assert!(matches!(result, Err(RepositoryError::Unavailable(_))));
    }
}
