//! Persistence port for recorded payments.

use crate::domain::entities::PaymentRequest;
use crate::error::RepositoryError;
use async_trait::async_trait;

/// Repository interface for storing payments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryPaymentRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Records a payment for a seat.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] when the store rejects or fails the write.
    async fn add_payment(&self, request: PaymentRequest) -> Result<(), RepositoryError>;
}
