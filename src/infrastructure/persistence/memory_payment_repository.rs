//! In-memory implementation of the payment store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::PaymentRequest;
use crate::domain::repositories::PaymentRepository;
use crate::error::RepositoryError;

/// Payment store keeping every accepted request in process memory.
///
/// Cloning shares the underlying storage.
#[derive(Default, Clone)]
pub struct InMemoryPaymentRepository {
    payments: Arc<RwLock<Vec<PaymentRequest>>>,
}

impl InMemoryPaymentRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of recorded payments in arrival order.
    pub async fn payments(&self) -> Vec<PaymentRequest> {
        self.payments.read().await.clone()
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn add_payment(&self, request: PaymentRequest) -> Result<(), RepositoryError> {
        self.payments.write().await.push(request);
        Ok(())
    }
}
