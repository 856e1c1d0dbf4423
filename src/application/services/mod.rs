//! Business logic services for the application layer.

pub mod payment_service;
pub mod theater_service;

pub use payment_service::PaymentService;
pub use theater_service::TheaterService;

use std::future::Future;
use std::time::Duration;

use crate::error::RepositoryError;

/// Runs a persistence call under a deadline.
///
/// When the deadline expires the call future is dropped, which aborts the
/// in-flight query, and [`RepositoryError::Timeout`] is returned.
pub(crate) async fn with_deadline<T, F>(limit: Duration, call: F) -> Result<T, RepositoryError>
where
    F: Future<Output = Result<T, RepositoryError>>,
{
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| RepositoryError::Timeout(limit))?
}
