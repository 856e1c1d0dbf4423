//! Shared state injected into handlers.
//!
//! Each service owns one state type. States are immutable after construction
//! and cheap to clone: they only hold `Arc`s to the services.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{PaymentService, TheaterService};
use crate::domain::repositories::{PaymentRepository, TheaterRepository};

/// State of the payment service.
#[derive(Clone)]
pub struct PaymentState {
    pub payment_service: Arc<PaymentService>,
}

impl PaymentState {
    /// Wires the payment service on top of `repository`.
    ///
    /// `store_timeout` bounds every repository call.
    pub fn new(repository: Arc<dyn PaymentRepository>, store_timeout: Duration) -> Self {
        Self {
            payment_service: Arc::new(PaymentService::new(repository, store_timeout)),
        }
    }
}

/// State of the theaters service.
#[derive(Clone)]
pub struct TheatersState {
    pub theater_service: Arc<TheaterService>,
}

impl TheatersState {
    /// Wires the theater service on top of `repository`.
    ///
    /// `store_timeout` bounds every repository call.
    pub fn new(repository: Arc<dyn TheaterRepository>, store_timeout: Duration) -> Self {
        Self {
            theater_service: Arc::new(TheaterService::new(repository, store_timeout)),
        }
    }
}
