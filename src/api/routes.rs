//! API route tables.
//!
//! Each path is bound to exactly one method; every other method on that path
//! falls back to [`reject_method`] and yields 400. GET routes reject `HEAD`
//! explicitly, since axum would otherwise answer it with the GET handler.

use crate::api::handlers::{
    add_payment_handler, movie_theaters_handler, reject_method, theater_movies_handler,
    tickets_handler,
};
use crate::state::{PaymentState, TheatersState};
use axum::{
    Router,
    routing::{get, post},
};

/// Routes of the payment service.
///
/// # Endpoints
///
/// - `POST /payment` - Record a payment
pub fn payment_routes() -> Router<PaymentState> {
    Router::new().route("/payment", post(add_payment_handler).fallback(reject_method))
}

/// Routes of the theaters service.
///
/// # Endpoints
///
/// - `GET /tickets`  - Tickets by date window, price range, theater and movie
/// - `GET /movies`   - Movies shown in a date window
/// - `GET /theaters` - Theaters showing a movie
pub fn theaters_routes() -> Router<TheatersState> {
    Router::new()
        .route(
            "/tickets",
            get(tickets_handler)
                .head(reject_method)
                .fallback(reject_method),
        )
        .route(
            "/movies",
            get(theater_movies_handler)
                .head(reject_method)
                .fallback(reject_method),
        )
        .route(
            "/theaters",
            get(movie_theaters_handler)
                .head(reject_method)
                .fallback(reject_method),
        )
}
