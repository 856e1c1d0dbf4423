//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`PaymentRequest`] - A validated request to pay for a seat
//! - [`Showing`] - A screening of a movie in a theater (catalog record)
//! - [`Ticket`], [`Movie`], [`Theater`] - Read-only projections returned to clients

pub mod payment;
pub mod showing;
pub mod ticket;

pub use payment::PaymentRequest;
pub use showing::Showing;
pub use ticket::{Movie, Theater, Ticket};
