// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Figma Connector
//!
//! A connector for the Figma REST API: sync tables, cards and dev-resource
//! actions published as named formulas for a host to drive.
//!
//! ## Features
//!
//! - **Sync Tables**: team and file components, styles, component sets,
//!   projects, project files and dev resources, paginated by continuation
//! - **Cards**: look up a single component, style or component set by key
//! - **Actions**: create, update and delete dev resources, one or in bulk
//! - **Auth**: OAuth2 bearer token, personal access token, refresh-token flow
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use figma_connector::{Connector, ConnectorConfig, FigmaConnector, Result};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ConnectorConfig::load(None)?;
//!     let connector = FigmaConnector::from_config(&config)?;
//!
//!     let status = connector.check().await;
//!
//!     let page = connector
//!         .execute(
//!             "SyncFileComponents",
//!             &json!({ "fileUrl": "https://www.figma.com/file/ABC123/Library" }),
//!             None,
//!         )
//!         .await?;
//!
//!     // Feed page.continuation() back in until it is None
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Connector Interface                         │
//! │  spec() → ConnectorSpec   check() → CheckResult                 │
//! │  execute(formula, args, continuation) → FormulaOutput           │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │   URLs   │   API     │    Engine     │  Mapper   │   Resolve   │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Team     │ Endpoints │ Sync step     │ Rows      │ Dev res.    │
//! │ File     │ Models    │ Continuation  │ Links     │ Components  │
//! │ Hints    │ HTTP/Auth │ Page stream   │ Defaults  │ Degradation │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the connector
pub mod error;

/// Common types and type aliases
pub mod types;

/// Figma URL extraction
pub mod urls;

/// Connector configuration
pub mod config;

/// Authentication implementations
pub mod auth;

/// Single-attempt HTTP client
pub mod http;

/// Figma REST API endpoints and response models
pub mod api;

/// Continuation-based pagination
pub mod pagination;

/// Output rows and declared schemas
pub mod schema;

/// Raw record to row mapping
pub mod mapper;

/// Cross-references between entities of a file
pub mod resolve;

/// Paginated sync driver
pub mod engine;

/// Named formulas and the formula catalog
pub mod formulas;

/// Connector trait and the Figma connector
pub mod connector;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::ConnectorConfig;
pub use connector::{CheckResult, Connector, ConnectorSpec, FigmaConnector};
pub use formulas::{Formula, FormulaOutput};
pub use pagination::Continuation;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
