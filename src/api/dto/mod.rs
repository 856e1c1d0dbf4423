//! Data Transfer Objects for API requests.
//!
//! Query DTOs carry raw strings; their `TryFrom` conversions produce the fully
//! populated query objects defined in [`crate::domain::repositories`].

pub mod movies;
pub mod params;
pub mod payment;
pub mod theaters;
pub mod tickets;
