//! Formulas module
//!
//! The named formulas and actions the connector publishes.
//!
//! # Formulas
//!
//! - Connection: `TestConnection`, `TestTeamAccess`
//! - Sync tables: `SyncTeamComponents`, `SyncFileComponents`, `SyncFileStyles`,
//!   `SyncFileComponentSets`, `SyncTeamProjects`, `SyncProjectFiles`,
//!   `SyncDevResources`
//! - Cards: `ComponentCard`, `StyleCard`, `ComponentSetCard`
//! - Actions: `CreateDevResource`, `UpdateDevResource`, `DeleteDevResource`,
//!   `BulkCreateDevResources`, `BulkUpdateDevResources`

mod account;
mod args;
mod cards;
mod catalog;
mod dev_resources;
mod sync;

pub use args::Args;
pub use catalog::{catalog, Formula, FormulaSpec, ParamSpec, ParamType, ResultSpec};

use crate::api::{DevResourceUpdate, NewDevResource};
use crate::connector::FigmaConnector;
use crate::engine::SyncPage;
use crate::error::{Error, Result};
use crate::pagination::Continuation;
use crate::types::JsonValue;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::debug;

/// Result of executing a formula
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormulaOutput {
    /// Object result (connection info, cards, action rows)
    Object { value: JsonValue },
    /// Status text
    Text { value: String },
    /// One page of a sync table
    Sync {
        #[serde(flatten)]
        page: SyncPage<JsonValue>,
    },
}

impl FormulaOutput {
    fn object<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self::Object {
            value: serde_json::to_value(value)?,
        })
    }

    fn text(value: String) -> Self {
        Self::Text { value }
    }

    fn sync<T: Serialize>(page: SyncPage<T>) -> Result<Self> {
        let result = page
            .result
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::Sync {
            page: SyncPage::new(result, page.continuation),
        })
    }

    /// Continuation of a sync page
    pub fn continuation(&self) -> Option<&Continuation> {
        match self {
            Self::Sync { page } => page.continuation.as_ref(),
            _ => None,
        }
    }

    /// The sync page, failing for object and text results
    pub fn into_sync_page(self) -> Result<SyncPage<JsonValue>> {
        match self {
            Self::Sync { page } => Ok(page),
            _ => Err(Error::invalid_input("Formula did not return a sync page")),
        }
    }
}

/// Current time as the host renders timestamps (`2024-05-01T12:00:00.000Z`)
fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl FigmaConnector {
    /// Run a formula with decoded arguments
    ///
    /// `continuation` only matters for paginated sync formulas.
    pub async fn run(
        &self,
        formula: Formula,
        args: &Args,
        continuation: Option<&Continuation>,
    ) -> Result<FormulaOutput> {
        debug!("Running {formula}");

        match formula {
            Formula::TestConnection => FormulaOutput::object(&self.test_connection().await?),
            Formula::TestTeamAccess => {
                let team_url = args.string("teamUrl")?;
                FormulaOutput::object(&self.test_team_access(&team_url).await?)
            }
            Formula::SyncTeamComponents => {
                let team_url = args.string("teamUrl")?;
                FormulaOutput::sync(self.sync_team_components(&team_url, continuation).await?)
            }
            Formula::SyncFileComponents => {
                let file_url = args.string("fileUrl")?;
                FormulaOutput::sync(self.sync_file_components(&file_url, continuation).await?)
            }
            Formula::SyncFileStyles => {
                let file_url = args.string("fileUrl")?;
                FormulaOutput::sync(self.sync_file_styles(&file_url, continuation).await?)
            }
            Formula::SyncFileComponentSets => {
                let file_url = args.string("fileUrl")?;
                FormulaOutput::sync(
                    self.sync_file_component_sets(&file_url, continuation)
                        .await?,
                )
            }
            Formula::SyncTeamProjects => {
                let team_url = args.string("teamUrl")?;
                FormulaOutput::sync(self.sync_team_projects(&team_url).await?)
            }
            Formula::SyncProjectFiles => {
                let project_id = args.optional_string("projectId")?.unwrap_or_default();
                let branch_data = args.flag("includeBranchData")?;
                FormulaOutput::sync(self.sync_project_files(&project_id, branch_data).await?)
            }
            Formula::ComponentCard => {
                let key = args.string("componentKey")?;
                let source_url = args.optional_string("sourceUrl")?;
                FormulaOutput::object(&self.component_card(&key, source_url.as_deref()).await?)
            }
            Formula::StyleCard => {
                let key = args.string("styleKey")?;
                let file_url = args.string("fileUrl")?;
                FormulaOutput::object(&self.style_card(&key, &file_url).await?)
            }
            Formula::ComponentSetCard => {
                let key = args.string("componentSetKey")?;
                let file_url = args.string("fileUrl")?;
                FormulaOutput::object(&self.component_set_card(&key, &file_url).await?)
            }
            Formula::SyncDevResources => {
                let file_url = args.string("fileUrl")?;
                let node_ids = args.optional_string("nodeIds")?;
                FormulaOutput::sync(
                    self.sync_dev_resources(&file_url, node_ids.as_deref())
                        .await?,
                )
            }
            Formula::CreateDevResource => {
                let item = NewDevResource {
                    file_key: args.string("fileKey")?,
                    node_id: args.string("nodeId")?,
                    name: args.string("name")?,
                    url: args.string("url")?,
                };
                FormulaOutput::object(&self.create_dev_resource(item).await?)
            }
            Formula::UpdateDevResource => {
                let update = DevResourceUpdate {
                    id: args.string("resourceId")?,
                    name: args.string("name")?,
                    url: args.string("url")?,
                };
                Ok(FormulaOutput::text(self.update_dev_resource(update).await?))
            }
            Formula::DeleteDevResource => {
                let file_key = args.string("fileKey")?;
                let resource_id = args.string("resourceId")?;
                Ok(FormulaOutput::text(
                    self.delete_dev_resource(&file_key, &resource_id).await?,
                ))
            }
            Formula::BulkCreateDevResources => {
                let result = self
                    .bulk_create_dev_resources(
                        args.strings("fileKeys")?,
                        args.strings("nodeIds")?,
                        args.strings("names")?,
                        args.strings("urls")?,
                    )
                    .await?;
                FormulaOutput::object(&result)
            }
            Formula::BulkUpdateDevResources => {
                let result = self
                    .bulk_update_dev_resources(
                        args.strings("resourceIds")?,
                        args.strings("names")?,
                        args.strings("urls")?,
                    )
                    .await?;
                FormulaOutput::object(&result)
            }
        }
    }
}
