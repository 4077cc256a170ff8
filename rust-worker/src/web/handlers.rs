//! Webhook endpoint handlers.
//!
//! The webhook handler:
//! 1. Verifies the `X-Hub-Signature` HMAC
//! 2. Extracts the new account's username
//! 3. Posts the welcome message
//! 4. Returns 200 with a plain-text status, whatever happened above

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use tracing::{error, info, warn};

use crate::event::WebhookEvent;
use crate::notify::Notifier;
use crate::web::signature::{strip_signature_prefix, verify_signature};
use crate::Config;

/// Header carrying the `sha256=<hex>` body signature.
pub const SIGNATURE_HEADER: &str = "X-Hub-Signature";

/// Response text for a delivery whose signature checks out.
pub const SIGNATURE_VALID: &str = "Webhook signature is valid. Processing the request...";

/// Response text for a delivery whose signature does not.
pub const SIGNATURE_INVALID: &str = "Webhook signature is not valid. Ignoring the request...";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(config: Config, notifier: Notifier) -> Self {
        Self {
            config: Arc::new(config),
            notifier,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Liveness endpoint.
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

// =============================================================================
// Account Webhook
// =============================================================================

/// Webhook endpoint.
///
/// The status code never reveals whether the signature was accepted; only the
/// response text differs.
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let header = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let signature = strip_signature_prefix(header);
    let body = String::from_utf8_lossy(&body);

    info!(body = %body, has_signature = !signature.is_empty(), "webhook_received");

    let valid = match verify_signature(state.config.webhook_secret.expose(), &body, signature) {
        Ok(valid) => valid,
        Err(e) => {
            warn!(error = %e, signature_length = signature.len(), "webhook_signature_malformed");
            false
        }
    };

    if !valid {
        info!("webhook_signature_invalid");
        return (StatusCode::OK, SIGNATURE_INVALID);
    }

    info!("webhook_signature_valid");

    let event = match WebhookEvent::parse(&body) {
        Ok(event) => event,
        Err(e) => {
            error!(error = %e, "webhook_payload_invalid");
            return (StatusCode::OK, SIGNATURE_VALID);
        }
    };

    info!(
        username = %event.username(),
        event = event.event.as_deref().unwrap_or("unknown"),
        "webhook_account_event"
    );

    if let Err(e) = state.notifier.notify(event.username()).await {
        error!(username = %event.username(), error = %e, "welcome_message_failed");
    }

    (StatusCode::OK, SIGNATURE_VALID)
}
