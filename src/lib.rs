//! # Movie Aggregator
//!
//! Two small HTTP services built with Axum:
//!
//! - **Payment service**: `POST /payment` records a seat payment
//! - **Theaters service**: `GET /tickets`, `GET /movies`, `GET /theaters`
//!   query a catalog of showings
//!
//! Each request goes through the same pipeline: route dispatch, method check,
//! field extraction and validation, one call into a persistence port, and
//! response encoding. Client input errors map to 400, store and encoding
//! failures to 500, always with an empty body.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and persistence port traits
//! - **Application Layer** ([`application`]) - Services calling the ports under a deadline
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory port implementations
//! - **API Layer** ([`api`]) - DTOs, handlers, middleware and route tables
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, RepositoryError};
pub use state::{PaymentState, TheatersState};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{Movie, PaymentRequest, Showing, Theater, Ticket};
    pub use crate::domain::repositories::{
        PaymentRepository, TheaterMoviesQuery, TheaterRepository, TheatersQuery, TicketQuery,
    };
    pub use crate::error::{AppError, RepositoryError};
    pub use crate::routes::{payment_router, theaters_router};
    pub use crate::state::{PaymentState, TheatersState};
}
