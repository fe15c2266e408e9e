//! Configuration constants and validation functions for the client.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{AlphaError, Result};

/// Query endpoint of the Wolfram|Alpha v2.0 API.
pub const DEFAULT_ENDPOINT: &str = "https://api.wolframalpha.com/v2/query";

/// Content type every query response must declare, compared verbatim.
pub const EXPECTED_CONTENT_TYPE: &str = "text/xml;charset=utf-8";

/// Environment variable holding the application identifier.
pub const APP_ID_ENV: &str = "WOLFRAMALPHA_APP_ID";

/// Environment variable overriding the query endpoint.
pub const ENDPOINT_ENV: &str = "WOLFRAMALPHA_ENDPOINT";

/// User agent string identifying this client.
pub const USER_AGENT: &str = concat!("wolframalpha-client/", env!("CARGO_PKG_VERSION"));

/// App ID pattern: letters, digits and dashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static APP_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("valid regex"));

/// Validate an application identifier.
///
/// # Examples
/// ```
/// use wolframalpha_client::config::validate_app_id;
///
/// assert!(validate_app_id("DEMO-1234567890").is_ok());
/// assert!(validate_app_id("").is_err());
/// assert!(validate_app_id("has space").is_err());
/// ```
pub fn validate_app_id(app_id: &str) -> Result<()> {
    if APP_ID_PATTERN.is_match(app_id) {
        Ok(())
    } else {
        Err(AlphaError::Config(format!(
            "invalid app id '{app_id}': expected letters, digits and dashes"
        )))
    }
}

/// Settings for a [`Client`](crate::client::Client).
///
/// `Debug` output redacts the app id.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub app_id: String,
    pub endpoint: String,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a configuration from `WOLFRAMALPHA_APP_ID` and the optional
    /// `WOLFRAMALPHA_ENDPOINT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let app_id =
            lookup(APP_ID_ENV).ok_or_else(|| AlphaError::Config(format!("{APP_ID_ENV} not set")))?;
        validate_app_id(&app_id)?;

        let mut config = Self::new(app_id);
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|e| !e.is_empty()) {
            config.endpoint = endpoint;
        }
        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("app_id", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
