/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_SANDBOX_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_VERSION,
};
use crate::model::requests::RequestOptions;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the IEX Cloud client
pub struct Config {
    /// Access token sent with every request
    pub token: String,
    /// API version path segment (`stable`, `beta`, `v1`, `sandbox`, ...)
    pub version: String,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the production REST API
    pub base_url: String,
    /// Base URL used when the version is `sandbox`
    pub sandbox_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sandbox_url: DEFAULT_SANDBOX_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment and an optional `.env` file
    ///
    /// Reads `IEX_TOKEN`, `IEX_API_VERSION`, `IEX_REST_BASE_URL`,
    /// `IEX_SANDBOX_BASE_URL` and `IEX_REST_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let token = get_env_or_default("IEX_TOKEN", String::new());
        if token.is_empty() {
            error!("IEX_TOKEN not found in environment variables or .env file");
        }

        Config {
            token,
            version: get_env_or_default("IEX_API_VERSION", DEFAULT_VERSION.to_string()),
            rest_api: RestApiConfig {
                base_url: get_env_or_default("IEX_REST_BASE_URL", DEFAULT_BASE_URL.to_string()),
                sandbox_url: get_env_or_default(
                    "IEX_SANDBOX_BASE_URL",
                    DEFAULT_SANDBOX_URL.to_string(),
                ),
                timeout: get_env_or_default("IEX_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration with an explicit token and default everything else
    ///
    /// Does not touch the environment.
    pub fn with_token(token: impl Into<String>) -> Self {
        Config {
            token: token.into(),
            version: DEFAULT_VERSION.to_string(),
            rest_api: RestApiConfig::default(),
        }
    }

    /// Replaces the API version
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Points the production base URL somewhere else (mock servers, proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Request options carrying this configuration's token, version and hosts
    #[must_use]
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions::new(self.token.clone())
            .with_version(self.version.clone())
            .with_base_url(self.rest_api.base_url.clone())
            .with_sandbox_url(self.rest_api.sandbox_url.clone())
    }
}
