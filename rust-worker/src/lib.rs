//! Welcome Bot - greets new Mastodon accounts with a direct message.
//!
//! The instance calls `POST /webhook` when an account is created. The bot
//! checks the HMAC signature on the delivery and, when it is valid, posts a
//! direct status to the new account through the instance's REST API.
//!
//! ## Flow
//!
//! ```text
//! account.created webhook → signature check → parse username → POST /api/v1/statuses
//! ```

pub mod config;
pub mod event;
pub mod notify;
pub mod web;

// Re-export commonly used types
pub use config::{Config, ConfigError, Secret};
pub use event::{EventError, WebhookEvent};
pub use notify::{Notifier, NotifyError};
pub use web::{create_router, AppState};
