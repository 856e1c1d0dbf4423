//! Utility functions shared by the API layer.
//!
//! - [`rfc822`] - Parsing of `DD Mon YY HH:MM ZONE` timestamps

pub mod rfc822;
