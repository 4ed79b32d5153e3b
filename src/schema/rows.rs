//! Output rows
//!
//! Every row is rebuilt on each invocation and owned by the call that
//! produced it. Field names follow the published table columns, which mix
//! snake_case upstream names with a few camelCase connector columns.

use serde::{Deserialize, Serialize};

/// Creator of a component, component set or style
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub handle: String,
    pub img_url: String,
}

/// Reference to a dev resource row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevResourceRef {
    pub id: String,
    pub name: String,
}

/// Reference to a component or component set row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub key: String,
    pub name: String,
}

/// Frame a component lives in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFrame {
    pub page_id: String,
    pub page_name: String,
}

/// Frame a component set lives in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSetFrame {
    pub name: String,
    pub node_id: String,
    pub page_id: String,
    pub page_name: String,
    pub background_color: String,
}

/// `TeamComponents` / `FileComponents` row, also the `ComponentCard` result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRow {
    pub key: String,
    pub file_key: String,
    pub node_id: String,
    pub thumbnail_url: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub user: UserRef,
    pub containing_frame: ComponentFrame,
    pub link: String,
    /// Only file-scoped syncs resolve dev resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_resources: Option<Vec<DevResourceRef>>,
}

/// `FileComponentSets` row, also the `ComponentSetCard` result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSetRow {
    pub key: String,
    pub file_key: String,
    pub node_id: String,
    pub thumbnail_url: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub user: UserRef,
    pub containing_frame: ComponentSetFrame,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_resources: Option<Vec<DevResourceRef>>,
}

/// `FileStyles` row, also the `StyleCard` result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRow {
    pub key: String,
    pub file_key: String,
    pub node_id: String,
    pub style_type: String,
    pub thumbnail_url: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub sort_position: String,
    pub user: UserRef,
    pub link: String,
}

/// `TeamProjects` row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRow {
    pub id: String,
    pub name: String,
    #[serde(rename = "teamId")]
    pub team_id: String,
    /// Not reported by the Projects API
    #[serde(rename = "fileCount")]
    pub file_count: u64,
    pub created_at: String,
    pub modified_at: String,
    pub link: String,
}

/// Branch summary of a project file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchInfo {
    pub count: u64,
    pub main_file_key: String,
}

/// `ProjectFiles` row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFileRow {
    pub key: String,
    pub name: String,
    pub thumbnail_url: String,
    pub last_modified: String,
    pub editor_type: String,
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    pub branches: BranchInfo,
    pub link: String,
}

/// `FigmaDevResources` row, also the `CreateDevResource` result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevResourceRow {
    pub id: String,
    pub name: String,
    pub url: String,
    pub file_key: String,
    pub node_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_set: Option<EntityRef>,
}

/// `TestConnection` result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub handle: String,
    pub email: String,
    pub img_url: String,
}

/// `TestTeamAccess` result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAccess {
    #[serde(rename = "teamId")]
    pub team_id: String,
    #[serde(rename = "componentCount")]
    pub component_count: u64,
    pub status: String,
}

/// `BulkCreateDevResources` result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkCreateResult {
    pub created: u64,
    pub errors: u64,
    pub details: String,
}

impl BulkCreateResult {
    pub fn new(created: u64, errors: u64) -> Self {
        Self {
            created,
            errors,
            details: format!("Created {created} resources, {errors} errors"),
        }
    }
}

/// `BulkUpdateDevResources` result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUpdateResult {
    pub updated: u64,
    pub errors: u64,
    pub details: String,
}

impl BulkUpdateResult {
    pub fn new(updated: u64, errors: u64) -> Self {
        Self {
            updated,
            errors,
            details: format!("Updated {updated} resources, {errors} errors"),
        }
    }
}
