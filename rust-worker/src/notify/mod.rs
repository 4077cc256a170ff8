//! Outbound notification of new accounts.
//!
//! Builds the scripted welcome message and posts it to the new account as a
//! direct status through the instance's REST API. A single attempt is made per
//! account; failures are returned to the caller, which decides whether to log
//! and carry on.

pub mod client;
pub mod message;

pub use client::{Notifier, NotifyError, StatusPost, Visibility};
pub use message::welcome_message;
