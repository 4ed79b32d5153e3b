//! Formula catalog
//!
//! Every formula the connector publishes, with its parameters, result
//! declaration and whether it has side effects.

use crate::error::Error;
use crate::schema::{declared, ObjectSchema};
use serde::Serialize;
use std::str::FromStr;

/// Parameter type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamType {
    String,
    Boolean,
    StringArray,
}

/// Declared parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub description: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

impl ParamSpec {
    fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            param_type: ParamType::String,
            description,
            optional: false,
        }
    }

    fn strings(name: &'static str, description: &'static str) -> Self {
        Self {
            param_type: ParamType::StringArray,
            ..Self::string(name, description)
        }
    }

    fn boolean(name: &'static str, description: &'static str) -> Self {
        Self {
            param_type: ParamType::Boolean,
            ..Self::string(name, description)
        }
    }

    fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Declared result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultSpec {
    /// A single object
    Object { schema: ObjectSchema },
    /// A plain status string
    String,
    /// Rows of a sync table
    Sync {
        table: &'static str,
        identity: &'static str,
        schema: ObjectSchema,
    },
}

/// Declared formula
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ParamSpec>,
    pub result: ResultSpec,
    pub is_action: bool,
}

impl FormulaSpec {
    /// Check if the formula backs a sync table
    pub fn is_sync(&self) -> bool {
        matches!(self.result, ResultSpec::Sync { .. })
    }
}

/// Every published formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formula {
    TestConnection,
    TestTeamAccess,
    SyncTeamComponents,
    SyncFileComponents,
    SyncFileStyles,
    SyncFileComponentSets,
    SyncTeamProjects,
    SyncProjectFiles,
    ComponentCard,
    StyleCard,
    ComponentSetCard,
    SyncDevResources,
    CreateDevResource,
    UpdateDevResource,
    DeleteDevResource,
    BulkCreateDevResources,
    BulkUpdateDevResources,
}

const TEAM_URL: &str = "Your Figma team URL (e.g., https://www.figma.com/files/team/123456789)";
const FILE_URL: &str = "Your Figma file URL (e.g., https://www.figma.com/file/ABC123/filename or https://www.figma.com/design/ABC123/filename)";

impl Formula {
    pub const ALL: [Formula; 17] = [
        Formula::TestConnection,
        Formula::TestTeamAccess,
        Formula::SyncTeamComponents,
        Formula::SyncFileComponents,
        Formula::SyncFileStyles,
        Formula::SyncFileComponentSets,
        Formula::SyncTeamProjects,
        Formula::SyncProjectFiles,
        Formula::ComponentCard,
        Formula::StyleCard,
        Formula::ComponentSetCard,
        Formula::SyncDevResources,
        Formula::CreateDevResource,
        Formula::UpdateDevResource,
        Formula::DeleteDevResource,
        Formula::BulkCreateDevResources,
        Formula::BulkUpdateDevResources,
    ];

    /// Published name
    pub fn name(self) -> &'static str {
        match self {
            Formula::TestConnection => "TestConnection",
            Formula::TestTeamAccess => "TestTeamAccess",
            Formula::SyncTeamComponents => "SyncTeamComponents",
            Formula::SyncFileComponents => "SyncFileComponents",
            Formula::SyncFileStyles => "SyncFileStyles",
            Formula::SyncFileComponentSets => "SyncFileComponentSets",
            Formula::SyncTeamProjects => "SyncTeamProjects",
            Formula::SyncProjectFiles => "SyncProjectFiles",
            Formula::ComponentCard => "ComponentCard",
            Formula::StyleCard => "StyleCard",
            Formula::ComponentSetCard => "ComponentSetCard",
            Formula::SyncDevResources => "SyncDevResources",
            Formula::CreateDevResource => "CreateDevResource",
            Formula::UpdateDevResource => "UpdateDevResource",
            Formula::DeleteDevResource => "DeleteDevResource",
            Formula::BulkCreateDevResources => "BulkCreateDevResources",
            Formula::BulkUpdateDevResources => "BulkUpdateDevResources",
        }
    }

    /// Full declaration
    pub fn spec(self) -> FormulaSpec {
        let (description, parameters, result) = match self {
            Formula::TestConnection => (
                "Test the Figma OAuth connection and return user information",
                vec![],
                ResultSpec::Object {
                    schema: declared::connection(),
                },
            ),
            Formula::TestTeamAccess => (
                "Test access to a Figma team and return basic team information",
                vec![ParamSpec::string("teamUrl", TEAM_URL)],
                ResultSpec::Object {
                    schema: declared::team_access(),
                },
            ),
            Formula::SyncTeamComponents => (
                "Syncs all components from a Figma team",
                vec![ParamSpec::string("teamUrl", TEAM_URL)],
                ResultSpec::Sync {
                    table: "TeamComponents",
                    identity: "TeamComponent",
                    schema: declared::components(),
                },
            ),
            Formula::SyncFileComponents => (
                "Syncs all components from a Figma file",
                vec![ParamSpec::string("fileUrl", FILE_URL)],
                ResultSpec::Sync {
                    table: "FileComponents",
                    identity: "FileComponent",
                    schema: declared::components(),
                },
            ),
            Formula::SyncFileStyles => (
                "Syncs all styles from a Figma file",
                vec![ParamSpec::string("fileUrl", FILE_URL)],
                ResultSpec::Sync {
                    table: "FileStyles",
                    identity: "FileStyle",
                    schema: declared::styles(),
                },
            ),
            Formula::SyncFileComponentSets => (
                "Syncs all component sets from a Figma file",
                vec![ParamSpec::string("fileUrl", FILE_URL)],
                ResultSpec::Sync {
                    table: "FileComponentSets",
                    identity: "FileComponentSet",
                    schema: declared::component_sets(),
                },
            ),
            Formula::SyncTeamProjects => (
                "Syncs all projects from a Figma team (Requires Projects API approval)",
                vec![ParamSpec::string("teamUrl", TEAM_URL)],
                ResultSpec::Sync {
                    table: "TeamProjects",
                    identity: "TeamProject",
                    schema: declared::projects(),
                },
            ),
            Formula::SyncProjectFiles => (
                "Syncs all files from a Figma project (Requires Projects API approval)",
                vec![
                    ParamSpec::string(
                        "projectId",
                        "The Figma project ID (get this from the TeamProjects sync table)",
                    ),
                    ParamSpec::boolean(
                        "includeBranchData",
                        "Include branch metadata for files with branches",
                    )
                    .optional(),
                ],
                ResultSpec::Sync {
                    table: "ProjectFiles",
                    identity: "ProjectFile",
                    schema: declared::project_files(),
                },
            ),
            Formula::ComponentCard => (
                "Get detailed information about a specific Figma component by its key",
                vec![
                    ParamSpec::string(
                        "componentKey",
                        "The component key from a sync table or Figma URL",
                    ),
                    ParamSpec::string(
                        "sourceUrl",
                        "Team URL or file URL containing the component (optional, helps determine context)",
                    )
                    .optional(),
                ],
                ResultSpec::Object {
                    schema: declared::components(),
                },
            ),
            Formula::StyleCard => (
                "Get detailed information about a specific Figma style by its key",
                vec![
                    ParamSpec::string("styleKey", "The style key from a sync table"),
                    ParamSpec::string("fileUrl", "File URL containing the style"),
                ],
                ResultSpec::Object {
                    schema: declared::styles(),
                },
            ),
            Formula::ComponentSetCard => (
                "Get detailed information about a specific Figma component set by its key",
                vec![
                    ParamSpec::string(
                        "componentSetKey",
                        "The component set key from a sync table",
                    ),
                    ParamSpec::string("fileUrl", "File URL containing the component set"),
                ],
                ResultSpec::Object {
                    schema: declared::component_sets(),
                },
            ),
            Formula::SyncDevResources => (
                "Sync dev resources from a Figma file",
                vec![
                    ParamSpec::string(
                        "fileUrl",
                        "URL of the Figma file (e.g., https://www.figma.com/file/ABC123/...)",
                    ),
                    ParamSpec::string(
                        "nodeIds",
                        "Optional comma-separated list of node IDs to filter resources",
                    )
                    .optional(),
                ],
                ResultSpec::Sync {
                    table: "FigmaDevResources",
                    identity: "DevResource",
                    schema: declared::dev_resources(),
                },
            ),
            Formula::CreateDevResource => (
                "Create a new dev resource and link it to a Figma node",
                vec![
                    ParamSpec::string(
                        "fileKey",
                        "The file key where the dev resource will be created",
                    ),
                    ParamSpec::string(
                        "nodeId",
                        "The target node ID to attach the dev resource to",
                    ),
                    ParamSpec::string("name", "The name of the dev resource"),
                    ParamSpec::string(
                        "url",
                        "The URL of the dev resource (e.g., Jira ticket, GitHub PR, documentation)",
                    ),
                ],
                ResultSpec::Object {
                    schema: declared::dev_resources(),
                },
            ),
            Formula::UpdateDevResource => (
                "Update an existing dev resource",
                vec![
                    ParamSpec::string("resourceId", "The ID of the dev resource to update"),
                    ParamSpec::string("name", "The new name for the dev resource"),
                    ParamSpec::string("url", "The new URL for the dev resource"),
                ],
                ResultSpec::String,
            ),
            Formula::DeleteDevResource => (
                "Delete a dev resource from a Figma file",
                vec![
                    ParamSpec::string("fileKey", "The file key containing the dev resource"),
                    ParamSpec::string("resourceId", "The ID of the dev resource to delete"),
                ],
                ResultSpec::String,
            ),
            Formula::BulkCreateDevResources => (
                "Create multiple dev resources at once",
                vec![
                    ParamSpec::strings(
                        "fileKeys",
                        "Array of file keys where resources will be created",
                    ),
                    ParamSpec::strings("nodeIds", "Array of node IDs to attach resources to"),
                    ParamSpec::strings("names", "Array of names for the dev resources"),
                    ParamSpec::strings("urls", "Array of URLs for the dev resources"),
                ],
                ResultSpec::Object {
                    schema: declared::bulk_create(),
                },
            ),
            Formula::BulkUpdateDevResources => (
                "Update multiple dev resources at once",
                vec![
                    ParamSpec::strings("resourceIds", "Array of resource IDs to update"),
                    ParamSpec::strings("names", "Array of new names for the resources"),
                    ParamSpec::strings("urls", "Array of new URLs for the resources"),
                ],
                ResultSpec::Object {
                    schema: declared::bulk_update(),
                },
            ),
        };

        FormulaSpec {
            name: self.name(),
            description,
            parameters,
            result,
            is_action: self.is_action(),
        }
    }

    /// Check if the formula has side effects
    pub fn is_action(self) -> bool {
        matches!(
            self,
            Formula::CreateDevResource
                | Formula::UpdateDevResource
                | Formula::DeleteDevResource
                | Formula::BulkCreateDevResources
                | Formula::BulkUpdateDevResources
        )
    }
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Formula::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| Error::UnknownFormula {
                name: name.to_string(),
            })
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Declarations of every formula
pub fn catalog() -> Vec<FormulaSpec> {
    Formula::ALL.into_iter().map(Formula::spec).collect()
}
