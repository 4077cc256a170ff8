//! Web server module for handling inbound webhooks.
//!
//! This module provides a small web server that:
//! - Answers liveness checks on `/`
//! - Receives account webhooks on `/webhook`
//! - Verifies the HMAC signature
//! - Posts a welcome message for verified deliveries
//!
//! Every webhook delivery is acknowledged with 200; outcomes are only visible in logs.

pub mod handlers;
pub mod signature;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{
    health, webhook, AppState, SIGNATURE_HEADER, SIGNATURE_INVALID, SIGNATURE_VALID,
};
pub use signature::{strip_signature_prefix, verify_signature, SignatureError};

/// Build the application router.
///
/// `/webhook` has no body size limit so oversized deliveries still get the
/// 200 acknowledgement instead of a 413.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/webhook", post(webhook).layer(DefaultBodyLimit::disable()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
