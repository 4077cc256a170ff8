//! Webhook signature verification.
//!
//! Mastodon signs webhook deliveries with HMAC-SHA256 over the raw request body,
//! keyed by the webhook secret, and sends the hex digest in the `X-Hub-Signature`
//! header as `sha256=<hex>`.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Prefix Mastodon puts in front of the hex digest.
pub const SIGNATURE_PREFIX: &str = "sha256=";

/// The claimed signature could not be decoded.
#[derive(Debug, Error, PartialEq)]
pub enum SignatureError {
    #[error("signature is empty")]
    Empty,

    #[error("signature is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("webhook secret rejected as hmac key")]
    InvalidKey,
}

/// Strip a leading `sha256=` from a signature header value, if present.
pub fn strip_signature_prefix(header: &str) -> &str {
    header.strip_prefix(SIGNATURE_PREFIX).unwrap_or(header)
}

/// Verify a webhook signature.
///
/// # Arguments
///
/// * `secret` - The shared webhook secret
/// * `body` - The raw request body, exactly as received
/// * `signature_hex` - The hex digest with any `sha256=` prefix already removed
///
/// # Returns
///
/// `Ok(true)` if the digest matches, `Ok(false)` if it does not, and an error if
/// `signature_hex` is empty, odd-length, or contains non-hex characters.
pub fn verify_signature(
    secret: &str,
    body: &str,
    signature_hex: &str,
) -> Result<bool, SignatureError> {
    if signature_hex.is_empty() {
        return Err(SignatureError::Empty);
    }

    let claimed = hex::decode(signature_hex)?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| SignatureError::InvalidKey)?;
    mac.update(body.as_bytes());

    // verify_slice compares in constant time.
    Ok(mac.verify_slice(&claimed).is_ok())
}
