//! Payment entity recorded by the payment service.

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// A request to pay for a single seat.
///
/// Instances only exist fully validated: the client id is non-blank and the
/// seat id is positive. Use [`PaymentRequest::new`] to construct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[validate(custom(function = "not_blank"))]
    client_id: String,

    #[validate(range(min = 1, message = "seat id must be positive"))]
    seat_id: i64,
}

impl PaymentRequest {
    /// Builds a validated payment request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] naming `client_id` when it is empty or
    /// whitespace-only, and `seat_id` when it is zero or negative.
    pub fn new(client_id: impl Into<String>, seat_id: i64) -> Result<Self, ValidationErrors> {
        let request = Self {
            client_id: client_id.into(),
            seat_id,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn seat_id(&self) -> i64 {
        self.seat_id
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("client id must not be empty".into());
        return Err(err);
    }
    Ok(())
}
