//! Auth configuration types
//!
//! Runtime auth configuration resolved from the connector config and the
//! environment. The connector never runs the interactive OAuth2 flow itself;
//! it either receives an access token or refreshes one from a refresh token.

use chrono::{DateTime, Utc};

/// Figma OAuth2 authorization endpoint
pub const FIGMA_AUTHORIZATION_URL: &str = "https://www.figma.com/oauth";

/// Figma OAuth2 token endpoint
pub const FIGMA_TOKEN_URL: &str = "https://api.figma.com/v1/oauth/token";

/// Scopes the connector requests during authorization
pub const FIGMA_SCOPES: &[&str] = &[
    "file_read",
    "projects:read",
    "file_dev_resources:read",
    "file_dev_resources:write",
];

/// Header carrying a Figma personal access token
pub const PERSONAL_ACCESS_TOKEN_HEADER: &str = "X-Figma-Token";

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication (tests, proxies that inject credentials)
    #[default]
    None,

    /// OAuth2 access token injected by the host
    Bearer {
        /// The bearer token
        token: String,
    },

    /// Personal access token sent in `X-Figma-Token`
    PersonalAccessToken {
        /// The token value
        token: String,
    },

    /// OAuth2 refresh-token flow
    Oauth2Refresh {
        /// Token endpoint URL
        token_url: String,
        /// Client ID
        client_id: String,
        /// Client secret
        client_secret: String,
        /// Refresh token
        refresh_token: String,
    },
}

impl AuthConfig {
    /// Short name of the auth kind, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            AuthConfig::None => "none",
            AuthConfig::Bearer { .. } => "bearer",
            AuthConfig::PersonalAccessToken { .. } => "personal_access_token",
            AuthConfig::Oauth2Refresh { .. } => "oauth2_refresh",
        }
    }
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_cached_token_not_expired() {
        let token = CachedToken::expires_in("test".to_string(), 3600);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_cached_token_expired() {
        let token = CachedToken::expires_in("test".to_string(), -100);
        assert!(token.is_expired());
    }

    #[test]
    fn test_cached_token_no_expiration() {
        let token = CachedToken::new("test".to_string(), None);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_auth_config_default_and_kind() {
        let config = AuthConfig::default();
        assert!(matches!(config, AuthConfig::None));
        assert_eq!(config.kind(), "none");
        assert_eq!(
            AuthConfig::PersonalAccessToken {
                token: "t".to_string()
            }
            .kind(),
            "personal_access_token"
        );
    }
}
