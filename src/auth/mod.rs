//! Authentication module
//!
//! Supports: OAuth2 bearer token, personal access token, OAuth2 refresh token
//!
//! The `Authenticator` applies credentials to outgoing requests and caches
//! refreshed access tokens until they expire.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{
    AuthConfig, CachedToken, FIGMA_AUTHORIZATION_URL, FIGMA_SCOPES, FIGMA_TOKEN_URL,
    PERSONAL_ACCESS_TOKEN_HEADER,
};

#[cfg(test)]
mod tests;
