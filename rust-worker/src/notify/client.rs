//! Mastodon status client for posting welcome messages.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use url::Url;

use super::message::welcome_message;
use crate::config::{Config, Secret};

/// Path of the "create status" endpoint, relative to the instance URL.
pub const STATUSES_PATH: &str = "api/v1/statuses";

/// Header the instance uses to deduplicate repeated posts.
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Errors raised while posting a welcome message.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("error while messaging {username}! Http status: {status}")]
    Status { username: String, status: StatusCode },

    #[error("request to instance failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid statuses endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Who can see a posted status.
///
/// Welcome posts are only ever sent directly to the new account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Only the author and mentioned accounts
    Direct,
}

/// JSON body of a `POST /api/v1/statuses` request.
#[derive(Debug, Clone, Serialize)]
pub struct StatusPost {
    pub status: String,
    pub visibility: Visibility,
}

impl StatusPost {
    /// The direct welcome post for `username`.
    pub fn welcome(username: &str) -> Self {
        Self {
            status: welcome_message(username),
            visibility: Visibility::Direct,
        }
    }
}

/// Posts welcome messages to a Mastodon instance.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct Notifier {
    client: Client,
    statuses_url: Url,
    access_token: Secret,
    timeout: Duration,
}

impl Notifier {
    /// Create a notifier for the instance at `instance_url`.
    pub fn new(
        client: Client,
        instance_url: &Url,
        access_token: Secret,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        Ok(Self {
            client,
            statuses_url: statuses_url(instance_url)?,
            access_token,
            timeout,
        })
    }

    /// Create a notifier from application configuration.
    pub fn from_config(client: Client, config: &Config) -> Result<Self, NotifyError> {
        Self::new(
            client,
            &config.instance_url,
            config.access_token.clone(),
            config.request_timeout(),
        )
    }

    /// Post the welcome message to `username`.
    ///
    /// Makes a single attempt. Any non-2xx response is returned as
    /// [`NotifyError::Status`].
    pub async fn notify(&self, username: &str) -> Result<(), NotifyError> {
        let post = StatusPost::welcome(username);

        let response = self
            .client
            .post(self.statuses_url.clone())
            .timeout(self.timeout)
            .bearer_auth(self.access_token.expose())
            .header(IDEMPOTENCY_HEADER, username)
            .json(&post)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status {
                username: username.to_string(),
                status,
            });
        }

        info!(
            username = %username,
            status_code = status.as_u16(),
            "welcome_message_sent"
        );

        Ok(())
    }
}

/// Resolve the statuses endpoint against an instance URL.
///
/// A trailing slash is added to the base so instances hosted under a path
/// prefix keep that prefix.
fn statuses_url(instance_url: &Url) -> Result<Url, url::ParseError> {
    let mut base = instance_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(STATUSES_PATH)
}
