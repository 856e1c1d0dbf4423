//! Infrastructure layer implementing the domain persistence ports.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations

pub mod persistence;
