//! Types for user service requests, responses and client configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;
use user_core::FieldError;

use crate::error::{ClientError, Result};

/// Environment variable holding an explicit base URL
pub const APP_URL_VAR: &str = "APP_URL";

/// Environment variable selecting a named environment
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Deployment the client talks to when no explicit URL is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Base URL of the service in this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Development => "http://localhost:8002",
            Self::Staging => "https://staging.api.example.com",
            Self::Production => "https://api.example.com",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ClientError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for connecting to the user service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service (e.g., "http://localhost:8002")
    pub url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config for an explicit base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Create a config pointing at a named environment.
    pub fn for_environment(environment: Environment) -> Self {
        Self::new(environment.base_url())
    }

    /// Build from `APP_URL`, falling back to `APP_ENV` (default development).
    pub fn from_env() -> Result<Self> {
        if let Ok(url) = std::env::var(APP_URL_VAR) {
            if !url.trim().is_empty() {
                return Ok(Self::new(url.trim()));
            }
        }

        let environment = match std::env::var(APP_ENV_VAR) {
            Ok(name) => name.parse()?,
            Err(_) => Environment::default(),
        };

        Ok(Self::for_environment(environment))
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the URL and strip trailing slashes.
    pub(crate) fn normalized_url(&self) -> Result<String> {
        let trimmed = self.url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let parsed =
            Url::parse(trimmed).map_err(|e| ClientError::InvalidUrl(format!("{trimmed}: {e}")))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        Ok(trimmed.to_string())
    }
}

/// Body returned by `/health` and `/status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Error body returned by the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
    /// Present on validation failures
    #[serde(default)]
    pub fields: Vec<FieldError>,
}
