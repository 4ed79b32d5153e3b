//! Connector configuration
//!
//! Loaded from a YAML or JSON file (chosen by extension) and then overlaid
//! with `FIGMA_*` environment variables, the way a host injects credentials.

use crate::auth::{AuthConfig, FIGMA_TOKEN_URL};
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, FIGMA_API_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Upstream base URL override
pub const ENV_API_BASE_URL: &str = "FIGMA_API_BASE_URL";
/// OAuth2 access token
pub const ENV_ACCESS_TOKEN: &str = "FIGMA_ACCESS_TOKEN";
/// Personal access token
pub const ENV_PERSONAL_ACCESS_TOKEN: &str = "FIGMA_PERSONAL_ACCESS_TOKEN";
/// OAuth2 client id for the refresh flow
pub const ENV_CLIENT_ID: &str = "FIGMA_CLIENT_ID";
/// OAuth2 client secret for the refresh flow
pub const ENV_CLIENT_SECRET: &str = "FIGMA_CLIENT_SECRET";
/// OAuth2 refresh token
pub const ENV_REFRESH_TOKEN: &str = "FIGMA_REFRESH_TOKEN";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete connector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Base URL for API requests
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfigDef,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_api_base_url() -> String {
    FIGMA_API_BASE_URL.to_string()
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            auth: AuthConfigDef::default(),
            http: HttpConfig::default(),
        }
    }
}

// ============================================================================
// Auth Config
// ============================================================================

/// Authentication configuration as written in the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfigDef {
    /// No authentication
    #[default]
    None,

    /// OAuth2 access token
    Bearer {
        /// The token value
        token: String,
    },

    /// Personal access token
    PersonalAccessToken {
        /// The token value
        token: String,
    },

    /// OAuth2 refresh-token flow
    Oauth2Refresh {
        /// Token endpoint URL
        #[serde(default = "default_token_url")]
        token_url: String,
        /// Client ID
        client_id: String,
        /// Client secret
        client_secret: String,
        /// Refresh token
        refresh_token: String,
    },
}

fn default_token_url() -> String {
    FIGMA_TOKEN_URL.to_string()
}

impl AuthConfigDef {
    /// Runtime auth configuration
    pub fn to_auth_config(&self) -> AuthConfig {
        match self.clone() {
            AuthConfigDef::None => AuthConfig::None,
            AuthConfigDef::Bearer { token } => AuthConfig::Bearer { token },
            AuthConfigDef::PersonalAccessToken { token } => AuthConfig::PersonalAccessToken { token },
            AuthConfigDef::Oauth2Refresh {
                token_url,
                client_id,
                client_secret,
                refresh_token,
            } => AuthConfig::Oauth2Refresh {
                token_url,
                client_id,
                client_secret,
                refresh_token,
            },
        }
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

// ============================================================================
// Loading
// ============================================================================

impl ConnectorConfig {
    /// Load from an optional file, overlay the process environment, validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.with_env(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file; `.json` files are JSON, anything else YAML
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        debug!("Loading config from {}", path.display());
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Parse YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlay environment variables read through `lookup`
    ///
    /// An access token wins over a personal access token, which wins over a
    /// refresh-token triple. Empty values are ignored.
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = var(ENV_API_BASE_URL) {
            self.api_base_url = base_url;
        }

        if let Some(token) = var(ENV_ACCESS_TOKEN) {
            self.auth = AuthConfigDef::Bearer { token };
        } else if let Some(token) = var(ENV_PERSONAL_ACCESS_TOKEN) {
            self.auth = AuthConfigDef::PersonalAccessToken { token };
        } else if let (Some(client_id), Some(client_secret), Some(refresh_token)) = (
            var(ENV_CLIENT_ID),
            var(ENV_CLIENT_SECRET),
            var(ENV_REFRESH_TOKEN),
        ) {
            self.auth = AuthConfigDef::Oauth2Refresh {
                token_url: default_token_url(),
                client_id,
                client_secret,
                refresh_token,
            };
        }

        self
    }

    /// Check the base URL and timeout
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api_base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "api_base_url must be an http(s) URL, got: {}",
                self.api_base_url
            )));
        }
        if self.http.timeout_secs == 0 {
            return Err(Error::config("http.timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    /// HTTP client settings
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.api_base_url.clone())
            .timeout(Duration::from_secs(self.http.timeout_secs));
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder.build()
    }
}
