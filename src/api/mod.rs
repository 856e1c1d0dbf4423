//! HTTP API layer.
//!
//! Translates requests into domain queries and results into status codes and
//! JSON bodies.
//!
//! # Modules
//!
//! - [`dto`] - Raw request shapes and their conversion into query objects
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route tables per service

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
