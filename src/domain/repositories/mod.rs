//! Persistence port definitions for the domain layer.
//!
//! Handlers never talk to a store directly: they go through these traits,
//! which lets any conforming implementation (or a test fake) be substituted.
//!
//! # Available Repositories
//!
//! - [`PaymentRepository`] - Payment recording
//! - [`TheaterRepository`] - Ticket, movie and theater queries

pub mod payment_repository;
pub mod theater_repository;

pub use payment_repository::PaymentRepository;
pub use theater_repository::{TheaterMoviesQuery, TheaterRepository, TheatersQuery, TicketQuery};

#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
#[cfg(test)]
pub use theater_repository::MockTheaterRepository;
