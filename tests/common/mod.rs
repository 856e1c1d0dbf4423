#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use movie_aggregator::domain::entities::{Movie, PaymentRequest, Showing, Theater, Ticket};
use movie_aggregator::domain::repositories::{
    PaymentRepository, TheaterMoviesQuery, TheaterRepository, TheatersQuery, TicketQuery,
};
use movie_aggregator::error::RepositoryError;
use movie_aggregator::infrastructure::persistence::InMemoryTheaterRepository;
use movie_aggregator::routes::{payment_router, theaters_router};
use movie_aggregator::state::{PaymentState, TheatersState};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const STORE_TIMEOUT: Duration = Duration::from_secs(2);

pub fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn showing(id: i64, movie: &str, theater: &str, start: &str, price: i64) -> Showing {
    let date_start = ts(start);
    Showing {
        id,
        movie_name: movie.to_string(),
        theater_name: theater.to_string(),
        date_start,
        date_end: date_start + ChronoDuration::hours(2),
        price,
        available_seats: format!("A{id},B{id}"),
    }
}

/// Showings spread over the first days of January 2023.
pub fn sample_catalog() -> Vec<Showing> {
    vec![
        showing(1, "Dune", "Imax", "2023-01-01T12:00:00Z", 25),
        showing(2, "Dune", "Imax", "2023-01-01T18:00:00Z", 60),
        showing(3, "Dune", "Odeon", "2023-01-01T15:00:00Z", 15),
        showing(4, "Alien", "Imax", "2023-01-03T20:00:00Z", 20),
        showing(5, "Dune", "Imax", "2023-01-05T12:00:00Z", 30),
        showing(6, "Barbie", "Rex", "2023-01-01T11:00:00Z", 12),
    ]
}

pub fn sample_repository() -> InMemoryTheaterRepository {
    InMemoryTheaterRepository::with_showings(sample_catalog())
}

pub fn payment_server(repository: Arc<dyn PaymentRepository>) -> TestServer {
    let state = PaymentState::new(repository, STORE_TIMEOUT);
    TestServer::new(payment_router(state)).unwrap()
}

pub fn theaters_server(repository: Arc<dyn TheaterRepository>) -> TestServer {
    let state = TheatersState::new(repository, STORE_TIMEOUT);
    TestServer::new(theaters_router(state)).unwrap()
}

/// Query of the reference ticket scenario: Dune at Imax, 1-2 Jan 2023, 10-50.
pub fn ticket_params() -> Vec<(&'static str, &'static str)> {
    vec![
        ("dateFrom", "01 Jan 23 10:00 UTC"),
        ("dateTo", "02 Jan 23 10:00 UTC"),
        ("priceFrom", "10"),
        ("priceTo", "50"),
        ("movieTheater", "Imax"),
        ("name", "Dune"),
    ]
}

/// Store that fails every call.
pub struct FailingRepository;

#[async_trait]
impl PaymentRepository for FailingRepository {
    async fn add_payment(&self, _request: PaymentRequest) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }
}

#[async_trait]
impl TheaterRepository for FailingRepository {
    async fn get_tickets(&self, _query: TicketQuery) -> Result<Vec<Ticket>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }

    async fn get_theater_movies(
        &self,
        _query: TheaterMoviesQuery,
    ) -> Result<Vec<Movie>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }

    async fn get_movie_theaters(
        &self,
        _query: TheatersQuery,
    ) -> Result<Vec<Theater>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }
}

/// Catalog wrapper counting how many times the store is reached.
#[derive(Default)]
pub struct CountingRepository {
    inner: InMemoryTheaterRepository,
    calls: AtomicUsize,
}

impl CountingRepository {
    pub fn new(inner: InMemoryTheaterRepository) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TheaterRepository for CountingRepository {
    async fn get_tickets(&self, query: TicketQuery) -> Result<Vec<Ticket>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_tickets(query).await
    }

    async fn get_theater_movies(
        &self,
        query: TheaterMoviesQuery,
    ) -> Result<Vec<Movie>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_theater_movies(query).await
    }

    async fn get_movie_theaters(
        &self,
        query: TheatersQuery,
    ) -> Result<Vec<Theater>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_movie_theaters(query).await
    }
}

/// Catalog returning a fixed result for every query.
pub struct FixedRepository {
    pub tickets: Vec<Ticket>,
    pub movies: Vec<Movie>,
    pub theaters: Vec<Theater>,
}

#[async_trait]
impl TheaterRepository for FixedRepository {
    async fn get_tickets(&self, _query: TicketQuery) -> Result<Vec<Ticket>, RepositoryError> {
        Ok(self.tickets.clone())
    }

    async fn get_theater_movies(
        &self,
        _query: TheaterMoviesQuery,
    ) -> Result<Vec<Movie>, RepositoryError> {
        Ok(self.movies.clone())
    }

    async fn get_movie_theaters(
        &self,
        _query: TheatersQuery,
    ) -> Result<Vec<Theater>, RepositoryError> {
        Ok(self.theaters.clone())
    }
}
