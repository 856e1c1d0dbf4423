//! Handler for the payment endpoint.

use axum::{body::Bytes, extract::State, http::StatusCode};

use crate::api::dto::payment::AddPaymentBody;
use crate::domain::entities::PaymentRequest;
use crate::error::AppError;
use crate::state::PaymentState;

/// Records a payment for a seat.
///
/// # Endpoint
///
/// `POST /payment`
///
/// # Request Body
///
/// ```json
/// { "clientId": "u1", "seatId": 5 }
/// ```
///
/// The body is decoded regardless of `Content-Type`. Only the first JSON value
/// is read; anything after it is ignored.
///
/// # Response Codes
///
/// - **200 OK**: payment stored, empty body
/// - **400 Bad Request**: malformed JSON, empty client id or non-positive seat
/// - **500 Internal Server Error**: the payment store failed
pub async fn add_payment_handler(
    State(state): State<PaymentState>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let payload = decode_body(&body)?;
    let request = PaymentRequest::try_from(payload)?;

    state.payment_service.add_payment(request).await?;

    Ok(StatusCode::OK)
}

fn decode_body(body: &[u8]) -> Result<AddPaymentBody, AppError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<AddPaymentBody>();

    match values.next() {
        Some(Ok(payload)) => Ok(payload),
        Some(Err(e)) => Err(AppError::bad_request(format!("malformed payment body: {e}"))),
        None => Err(AppError::bad_request("empty payment body")),
    }
}
