//! Configuration handling for the lookup binary.
//!
//! Values come from environment variables, which is how launcher workflows
//! hand over their settings. `Config::from_env` fills in defaults for the
//! endpoints and validates the URLs.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

use url::Url;

use crate::lookup::session::DEFAULT_DETAIL_URL;

/// Environment variable names, as set by the launcher workflow.
pub const ENV_APP_KEY: &str = "key";
pub const ENV_APP_SECRET: &str = "secret";
pub const ENV_API_URL: &str = "api_url";
pub const ENV_DETAIL_URL: &str = "detail_url";

const DEFAULT_API_URL: &str = "https://openapi.youdao.com/api";

/// Runtime configuration for one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    app_key: String,
    app_secret: String,
    api_url: String,
    detail_url: String,
}

impl Config {
    /// Create a new config explicitly, validating both URLs.
    pub fn new(
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        api_url: impl Into<String>,
        detail_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_url = api_url.into();
        let detail_url = detail_url.into();
        validate_url("api_url", &api_url)?;
        validate_url("detail_url", &detail_url)?;

        Ok(Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            api_url,
            detail_url,
        })
    }

    /// Load from environment variables, falling back to defaults.
    ///
    /// Missing credentials are not an error here: the provider answers with
    /// its own error code, which is shown to the user like any other.
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_key = env::var(ENV_APP_KEY).unwrap_or_default();
        let app_secret = env::var(ENV_APP_SECRET).unwrap_or_default();
        let api_url = env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let detail_url =
            env::var(ENV_DETAIL_URL).unwrap_or_else(|_| DEFAULT_DETAIL_URL.to_string());
        Self::new(app_key, app_secret, api_url, detail_url)
    }

    /// Application key issued by the translation provider.
    pub fn app_key(&self) -> &str {
        &self.app_key
    }
    /// Secret paired with the application key, used only for signing.
    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }
    /// Translation API endpoint.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
    /// Prefix of the per-word detail page; the raw word is appended.
    pub fn detail_url(&self) -> &str {
        &self.detail_url
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        })
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
