// Copyright 2025 Cowboy AI, LLC.

//! DigitalOcean API client configuration

use serde::{Deserialize, Serialize};

use crate::errors::{DigitalOceanError, DigitalOceanResult};

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.digitalocean.com/";

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "DIGITALOCEAN_TOKEN";

/// Environment variable overriding the API endpoint
pub const BASE_URL_ENV: &str = "DIGITALOCEAN_API_URL";

/// Environment variable overriding the request timeout
pub const TIMEOUT_ENV: &str = "DIGITALOCEAN_TIMEOUT_SECS";

/// Configuration for the DigitalOcean API connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://api.digitalocean.com/")
    pub base_url: String,

    /// Personal access token sent as a bearer token
    pub api_token: String,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a configuration for the default endpoint
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            ..Self::default()
        }
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the User-Agent header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> DigitalOceanResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> DigitalOceanResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = lookup(TOKEN_ENV)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                DigitalOceanError::Configuration(format!("{} not set", TOKEN_ENV))
            })?;

        let mut config = Self::new(api_token);

        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config.base_url = base_url;
        }

        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            config.timeout_secs = timeout.parse().map_err(|e| {
                DigitalOceanError::Configuration(format!("Invalid {}: {}", TIMEOUT_ENV, e))
            })?;
        }

        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: String::new(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}
