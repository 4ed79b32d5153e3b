//! Error types for the Figma connector
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Figma connector
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors (raised before any network call)
    // ============================================================================
    #[error("{message}")]
    InvalidUrl { message: String },

    #[error("{message}")]
    InvalidInput { message: String },

    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("Unknown formula: {name}")]
    UnknownFormula { name: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("Token refresh failed: {message}")]
    TokenRefresh { message: String },

    // ============================================================================
    // Upstream Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response as reported by the HTTP adapter
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Non-2xx response rephrased for the end user
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// 2xx response whose per-item errors rejected the request
    #[error("{message}")]
    Rejected { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid URL error
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a missing parameter error
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
        }
    }

    /// Create a rejected error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Status code carried by an upstream status error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } | Error::Upstream { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the message is meant to be shown verbatim to the end user
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::InvalidUrl { .. }
                | Error::InvalidInput { .. }
                | Error::MissingParameter { .. }
                | Error::Upstream { .. }
                | Error::Rejected { .. }
                | Error::NotFound { .. }
        )
    }

    /// Rephrase an upstream status error as `"{context}: {message}"`.
    ///
    /// Every other error is returned unchanged.
    pub fn into_upstream(self, context: &str) -> Self {
        match self {
            Error::HttpStatus { status, message } => Error::Upstream {
                status,
                message: format!("{context}: {message}"),
            },
            other => other,
        }
    }
}

/// Result type alias for the Figma connector
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for attaching user-facing context to upstream failures
pub trait ResultExt<T> {
    /// Rephrase a status error with the given context, pass others through
    fn upstream(self, context: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn upstream(self, context: &str) -> Result<T> {
        self.map_err(|e| e.into().into_upstream(context))
    }
}
