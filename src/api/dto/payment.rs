//! DTO for the payment endpoint.

use serde::Deserialize;
use validator::ValidationErrors;

use crate::domain::entities::PaymentRequest;

/// JSON body of `POST /payment`.
///
/// ```json
/// { "clientId": "u1", "seatId": 5 }
/// ```
///
/// Unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPaymentBody {
    pub client_id: String,
    pub seat_id: i64,
}

impl TryFrom<AddPaymentBody> for PaymentRequest {
    type Error = ValidationErrors;

    fn try_from(body: AddPaymentBody) -> Result<Self, Self::Error> {
        PaymentRequest::new(body.client_id, body.seat_id)
    }
}
