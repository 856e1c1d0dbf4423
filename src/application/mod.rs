//! Application layer: services that sit between HTTP handlers and the
//! persistence ports.

pub mod services;
