//! Payment recording service.

use std::sync::Arc;
use std::time::Duration;

use super::with_deadline;
use crate::domain::entities::PaymentRequest;
use crate::domain::repositories::PaymentRepository;
use crate::error::RepositoryError;

/// Forwards validated payment requests to the payment store.
pub struct PaymentService {
    repository: Arc<dyn PaymentRepository>,
    timeout: Duration,
}

impl PaymentService {
    /// Creates a new payment service.
    ///
    /// `timeout` bounds every call into the repository.
    pub fn new(repository: Arc<dyn PaymentRepository>, timeout: Duration) -> Self {
        Self {
            repository,
            timeout,
        }
    }

    /// Records a payment.
    ///
    /// # Errors
    ///
    /// Returns the repository error as-is, or [`RepositoryError::Timeout`]
    /// when the store does not answer in time.
    pub async fn add_payment(&self, request: PaymentRequest) -> Result<(), RepositoryError> {
        let client_id = request.client_id().to_string();
        let seat_id = request.seat_id();

        with_deadline(self.timeout, self.repository.add_payment(request)).await?;

        tracing::info!(client_id = %client_id, seat_id, "Payment recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPaymentRepository;
    use async_trait::async_trait;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_add_payment_forwards_request() {
        let mut mock_repo = MockPaymentRepository::new();

        mock_repo
            .expect_add_payment()
            .withf(|req| req.client_id() == "u1" && req.seat_id() == 5)
            .times(1)
            .returning(|_| Ok(()));

        let service = PaymentService::new(Arc::new(mock_repo), TIMEOUT);

        let result = service
            .add_payment(PaymentRequest::new("u1", 5).unwrap())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_add_payment_propagates_store_error() {
        let mut mock_repo = MockPaymentRepository::new();

        mock_repo
            .expect_add_payment()
            .times(1)
            .returning(|_| Err(RepositoryError::Unavailable("connection refused".to_string())));

        let service = PaymentService::new(Arc::new(mock_repo), TIMEOUT);

        let result = service
            .add_payment(PaymentRequest::new("u1", 5).unwrap())
            .await;

        assert!(matches!(result, Err(RepositoryError::Unavailable(_))));
    }

    struct StalledRepository;

    #[async_trait]
    impl PaymentRepository for StalledRepository {
        async fn add_payment(&self, _request: PaymentRequest) -> Result<(), RepositoryError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_add_payment_times_out() {
        let service = PaymentService::new(Arc::new(StalledRepository), Duration::from_millis(20));

        let result = service
            .add_payment(PaymentRequest::new("u1", 5).unwrap())
            .await;

        assert!(matches!(result, Err(RepositoryError::Timeout(_))));
    }
}
