//! Client configuration types.

use qbreader_core::{QbError, Result};
use std::time::Duration;

/// The QB Reader API base URL
pub const DEFAULT_BASE_URL: &str = "https://www.qbreader.org/api";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "QBREADER_BASE_URL";

/// Environment variable overriding the timeout, in whole seconds
pub const TIMEOUT_ENV: &str = "QBREADER_TIMEOUT_SECS";

/// Connection settings for a [`QbReaderClient`](crate::QbReaderClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("qbreader-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration overridden by `QBREADER_BASE_URL` and `QBREADER_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV) {
            config = config.base_url(url);
        }

        if let Some(secs) = lookup(TIMEOUT_ENV) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| QbError::Config(format!("{TIMEOUT_ENV} must be whole seconds, got {secs:?}")))?;
            config = config.timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}
