//! Top-level routers of the two services.
//!
//! # Route Structure
//!
//! Payment service:
//!
//! - `POST /payment`
//!
//! Theaters service:
//!
//! - `GET /tickets`
//! - `GET /movies`
//! - `GET /theaters`
//!
//! Unknown paths fall through to the default 404. Both routers carry the
//! request tracing layer.

use crate::api;
use crate::api::middleware::tracing;
use crate::state::{PaymentState, TheatersState};
use axum::Router;

/// Builds the payment service router.
pub fn payment_router(state: PaymentState) -> Router {
    api::routes::payment_routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Builds the theaters service router.
pub fn theaters_router(state: TheatersState) -> Router {
    api::routes::theaters_routes()
        .with_state(state)
        .layer(tracing::layer())
}
