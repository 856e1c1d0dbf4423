//! Repository implementations.
//!
//! A database-backed store is outside the scope of this crate; the in-memory
//! repositories below implement the persistence ports so that the services
//! run standalone and can be exercised end to end in tests.
//!
//! # Repositories
//!
//! - [`InMemoryPaymentRepository`] - Payment recording
//! - [`InMemoryTheaterRepository`] - Catalog queries over a list of showings

pub mod memory_payment_repository;
pub mod memory_theater_repository;

pub use memory_payment_repository::InMemoryPaymentRepository;
pub use memory_theater_repository::InMemoryTheaterRepository;
