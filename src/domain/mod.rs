//! Domain layer: entities and persistence ports.
//!
//! # Architecture
//!
//! - [`entities`] - Payment request and catalog projections
//! - [`repositories`] - Persistence port traits and their query objects
//!
//! The domain layer has no dependency on the HTTP or infrastructure layers.

pub mod entities;
pub mod repositories;
