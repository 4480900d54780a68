//! Client configuration.
//!
//! Holds the base URL, the access key and the optional comment tag. The key
//! and comment are the only process-wide settings the library has; changing
//! them goes through `TornApi::set_key` / `TornApi::set_comment`.

use crate::error::ConfigError;

/// Production host of the Torn API.
pub const DEFAULT_BASE_URL: &str = "https://api.torn.com";

pub const ENV_KEY: &str = "TORN_API_KEY";
pub const ENV_COMMENT: &str = "TORN_API_COMMENT";
pub const ENV_BASE_URL: &str = "TORN_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub key: String,
    /// Sent as `comment=` so the key owner can tell callers apart in their logs.
    pub comment: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            key: String::new(),
            comment: None,
        }
    }
}

impl ClientConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Read `TORN_API_KEY` (required), `TORN_API_COMMENT` and
    /// `TORN_API_BASE_URL` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let key = lookup(ENV_KEY)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingVar(ENV_KEY))?;
        let mut config = Self::new(key);
        if let Some(comment) = lookup(ENV_COMMENT) {
            config = config.with_comment(comment);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(&base_url)?;
        }
        Ok(config)
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        self.comment = (!comment.is_empty()).then_some(comment);
        self
    }
}
