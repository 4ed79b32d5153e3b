//! Connector trait and the Figma connector
//!
//! Defines the surface a host drives: a declarative spec, a connection
//! check, and formula execution by name.

use crate::api::FigmaApi;
use crate::auth::{FIGMA_AUTHORIZATION_URL, FIGMA_SCOPES, FIGMA_TOKEN_URL};
use crate::config::ConnectorConfig;
use crate::error::{Result, ResultExt};
use crate::formulas::{catalog, Args, Formula, FormulaOutput, FormulaSpec};
use crate::http::HttpClient;
use crate::mapper;
use crate::pagination::Continuation;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

// ============================================================================
// Connector Spec (for the host)
// ============================================================================

/// Connector specification returned by spec()
#[derive(Debug, Clone, Serialize)]
pub struct ConnectorSpec {
    /// Connector name
    pub name: String,

    /// Human-readable title
    pub title: String,

    /// Description
    pub description: Option<String>,

    /// OAuth2 settings the host uses to obtain tokens
    pub auth: OAuthSpec,

    /// Every published formula
    pub formulas: Vec<FormulaSpec>,
}

/// OAuth2 authorization-code settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthSpec {
    /// Authorization URL
    pub authorization_url: String,
    /// Token exchange URL
    pub token_url: String,
    /// Requested scopes
    pub scopes: Vec<String>,
}

impl OAuthSpec {
    fn figma() -> Self {
        Self {
            authorization_url: FIGMA_AUTHORIZATION_URL.to_string(),
            token_url: FIGMA_TOKEN_URL.to_string(),
            scopes: FIGMA_SCOPES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

// ============================================================================
// Check Result
// ============================================================================

/// Result of a connection check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the check succeeded
    pub success: bool,

    /// Error message if failed
    pub message: Option<String>,

    /// Display name of the connected account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,
}

impl CheckResult {
    /// Create a successful check result
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
            connection_name: None,
        }
    }

    /// Create a failed check result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            connection_name: None,
        }
    }

    /// Attach the connected account's name
    #[must_use]
    pub fn with_connection_name(mut self, name: impl Into<String>) -> Self {
        self.connection_name = Some(name.into());
        self
    }
}

// ============================================================================
// Connector Trait
// ============================================================================

/// Core trait a host drives
#[async_trait]
pub trait Connector: Send + Sync {
    /// Returns the connector specification
    fn spec(&self) -> ConnectorSpec;

    /// Tests if credentials are valid; failures are reported, never raised
    async fn check(&self) -> CheckResult;

    /// Executes a formula by name with JSON arguments keyed by parameter name
    ///
    /// `continuation` is the token returned by the previous sync step.
    async fn execute(
        &self,
        formula: &str,
        args: &Value,
        continuation: Option<&Continuation>,
    ) -> Result<FormulaOutput>;
}

// ============================================================================
// Figma Connector
// ============================================================================

/// The Figma connector
#[derive(Debug)]
pub struct FigmaConnector {
    api: FigmaApi,
}

impl FigmaConnector {
    /// Create a connector over an API client
    pub fn new(api: FigmaApi) -> Self {
        Self { api }
    }

    /// Build the HTTP stack described by a configuration
    pub fn from_config(config: &ConnectorConfig) -> Result<Self> {
        let auth = config.auth.to_auth_config();
        info!(
            "Connecting to {} with {} auth",
            config.api_base_url,
            auth.kind()
        );
        let http = HttpClient::with_auth(config.http_client_config(), auth)?;
        Ok(Self::new(FigmaApi::new(http)))
    }

    /// The upstream API
    pub fn api(&self) -> &FigmaApi {
        &self.api
    }
}

#[async_trait]
impl Connector for FigmaConnector {
    fn spec(&self) -> ConnectorSpec {
        ConnectorSpec {
            name: "figma".to_string(),
            title: "Figma".to_string(),
            description: Some(
                "Sync components, styles, projects and dev resources from Figma".to_string(),
            ),
            auth: OAuthSpec::figma(),
            formulas: catalog(),
        }
    }

    async fn check(&self) -> CheckResult {
        match self.api().me().await.upstream("Failed to connect to Figma") {
            Ok(me) => CheckResult::success().with_connection_name(mapper::connection_name(&me)),
            Err(e) => {
                warn!("Connection check failed: {e}");
                CheckResult::failure(e.to_string())
            }
        }
    }

    async fn execute(
        &self,
        formula: &str,
        args: &Value,
        continuation: Option<&Continuation>,
    ) -> Result<FormulaOutput> {
        let formula: Formula = formula.parse()?;
        let args = Args::from_value(args)?;
        self.run(formula, &args, continuation).await
    }
}
