//! REST API: routing, error envelope, request/response types.

pub mod error;
pub mod handlers;
pub mod types;

use axum::routing::{get, post};
use axum::Router;

use crate::server::AppState;

/// Build the `/api` router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .route("/register-wallet", post(handlers::register_wallet))
        .route("/login-wallet", post(handlers::login_wallet))
        .route("/update-wallet", post(handlers::update_wallet))
        .route("/payment-request", post(handlers::create_payment_request))
        .route("/payment-requests", get(handlers::list_payment_requests))
        .route(
            "/payment-request/contract/:contract_request_id",
            get(handlers::get_payment_request_by_contract),
        )
        .route(
            "/upi-id/contract/:contract_request_id",
            get(handlers::get_upi_details),
        )
        .route("/health", get(handlers::health))
        .route("/test", get(handlers::test_echo))
}
