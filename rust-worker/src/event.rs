//! Webhook payload types.
//!
//! Mastodon delivers admin webhooks as JSON envelopes of the form
//! `{"event": "account.created", "created_at": "...", "object": {...}}`.
//! Only the fields needed to greet the new account are modelled; everything
//! else in the payload is ignored.

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading a verified webhook body.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("webhook body is not valid json or lacks object.username: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("webhook object.username is empty")]
    EmptyUsername,
}

/// Envelope of an inbound webhook delivery.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    /// Event name, e.g. `account.created`
    #[serde(default)]
    pub event: Option<String>,
    /// The subject of the event
    pub object: AccountObject,
}

/// The account the event refers to.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountObject {
    /// Local username, without the leading `@` or domain
    pub username: String,
}

impl WebhookEvent {
    /// Parse a raw webhook body.
    pub fn parse(body: &str) -> Result<Self, EventError> {
        let event: WebhookEvent = serde_json::from_str(body)?;
        if event.object.username.is_empty() {
            return Err(EventError::EmptyUsername);
        }
        Ok(event)
    }

    pub fn username(&self) -> &str {
        &self.object.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_payload() {
        let event = WebhookEvent::parse(r#"{"object":{"username":"alice"}}"#).unwrap();
        assert_eq!(event.username(), "alice");
        assert!(event.event.is_none());
    }

    #[test]
    fn test_parse_full_account_created_payload() {
        let body = r#"{
            "event": "account.created",
            "created_at": "2024-01-01T00:00:00.000Z",
            "object": {
                "id": "109",
                "username": "newuser",
                "domain": null,
                "email": "newuser@example.com",
                "account": {"id": "109", "username": "newuser", "acct": "newuser"}
            }
        }"#;

        let event = WebhookEvent::parse(body).unwrap();
        assert_eq!(event.event.as_deref(), Some("account.created"));
        assert_eq!(event.username(), "newuser");
    }

    #[test]
    fn test_parse_missing_username() {
        let result = WebhookEvent::parse(r#"{"object":{"id":"1"}}"#);
        assert!(matches!(result, Err(EventError::Malformed(_))));
    }

    #[test]
    fn test_parse_missing_object() {
        let result = WebhookEvent::parse(r#"{"event":"account.created"}"#);
        assert!(matches!(result, Err(EventError::Malformed(_))));
    }

    #[test]
    fn test_parse_not_json() {
        assert!(matches!(
            WebhookEvent::parse("not json"),
            Err(EventError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_empty_username() {
        assert!(matches!(
            WebhookEvent::parse(r#"{"object":{"username":""}}"#),
            Err(EventError::EmptyUsername)
        ));
    }
}
