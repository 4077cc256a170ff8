//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables once at startup. The
//! resulting [`Config`] is immutable and shared across requests.

use std::env;
use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;
use url::Url;

/// Instance the bot posts to when `INSTANCE_URL` is unset.
pub const DEFAULT_INSTANCE_URL: &str = "https://shakedown.social";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    /// `INSTANCE_URL` could not be parsed.
    #[error("invalid instance url {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// A string that must never show up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the underlying value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token used for outbound API calls (`ACCESS_TOKEN`)
    pub access_token: Secret,

    /// Shared HMAC key for inbound webhook signatures (`WEBHOOK_SECRET`)
    pub webhook_secret: Secret,

    /// Base URL of the Mastodon instance
    pub instance_url: Url,

    /// Port for the web server to listen on
    pub port: u16,

    /// Outbound HTTP request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url =
            env::var("INSTANCE_URL").unwrap_or_else(|_| DEFAULT_INSTANCE_URL.to_string());
        let instance_url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidUrl {
            value: raw_url.clone(),
            source,
        })?;

        Ok(Config {
            access_token: required("ACCESS_TOKEN")?,
            webhook_secret: required("WEBHOOK_SECRET")?,
            instance_url,
            port: parse_or("PORT", 8080),
            request_timeout_ms: parse_or("REQUEST_TIMEOUT_MS", 10_000),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Read a variable that must be present and non-blank.
fn required(name: &'static str) -> Result<Secret, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(Secret::new(v)),
        _ => Err(ConfigError::Missing(name)),
    }
}

/// Parse a numeric variable, falling back to `default` when unset or invalid.
fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn!(env_var = name, value = %raw, "invalid_numeric_value_using_default");
            default
        }
    }
}
