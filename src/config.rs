//! Runtime configuration for reaching the prediction service.
//!
//! The only setting is the service base URL, read from `EXOSCOPE_API_BASE`
//! and falling back to a local development server.

use thiserror::Error;
use url::Url;

/// Environment variable holding the prediction service base URL.
pub const API_BASE_ENV: &str = "EXOSCOPE_API_BASE";
/// Base URL used when the environment does not provide one.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Errors raised while resolving the service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL could not be parsed.
    #[error("Invalid EXOSCOPE_API_BASE value '{value}': {source}")]
    InvalidUrl {
        value: String,
        source: url::ParseError,
    },
    /// The base URL uses a scheme other than http/https.
    #[error("Unsupported scheme '{scheme}' in EXOSCOPE_API_BASE; expected http or https")]
    UnsupportedScheme { scheme: String },
}

/// Where the prediction service lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build from an explicit base URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
            value: trimmed.to_string(),
            source,
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    scheme: other.to_string(),
                });
            }
        }
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve from `EXOSCOPE_API_BASE`, using the default when unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(API_BASE_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Self::new(DEFAULT_API_BASE),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a service path such as `/health`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}
