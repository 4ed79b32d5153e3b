//! Raw upstream records
//!
//! Every field the Figma API may omit is an `Option`; defaults are applied
//! only when a record is mapped into an output row. Collections tolerate both
//! a missing key and an explicit `null`.

use crate::types::scalar_to_string;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treat `null` like a missing field
fn null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept ids sent either as strings or as numbers
fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(scalar_to_string))
}

// ============================================================================
// Users
// ============================================================================

/// `GET /me`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MeResponse {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    pub handle: Option<String>,
    pub email: Option<String>,
    pub img_url: Option<String>,
}

/// Author of a published component or style
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawUser {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    pub handle: Option<String>,
    pub img_url: Option<String>,
}

// ============================================================================
// Components, component sets, styles
// ============================================================================

/// Frame a published node lives in
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFrame {
    pub name: Option<String>,
    pub node_id: Option<String>,
    pub page_id: Option<String>,
    pub page_name: Option<String>,
    pub background_color: Option<String>,
}

/// A published component (also the shape of a component set)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawComponent {
    pub key: Option<String>,
    pub file_key: Option<String>,
    pub node_id: Option<String>,
    pub thumbnail_url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub user: Option<RawUser>,
    pub containing_frame: Option<RawFrame>,
}

/// Component sets share the component record shape
pub type RawComponentSet = RawComponent;

/// A published style
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawStyle {
    pub key: Option<String>,
    pub file_key: Option<String>,
    pub node_id: Option<String>,
    pub style_type: Option<String>,
    pub thumbnail_url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub sort_position: Option<String>,
    pub user: Option<RawUser>,
}

/// `meta` of a components listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentsMeta {
    #[serde(default, deserialize_with = "null_default")]
    pub components: Vec<RawComponent>,
}

/// `GET /teams/{id}/components`, `GET /files/{key}/components`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentsResponse {
    #[serde(default, deserialize_with = "null_default")]
    pub meta: ComponentsMeta,
}

/// `meta` of a component sets listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentSetsMeta {
    #[serde(default, deserialize_with = "null_default")]
    pub component_sets: Vec<RawComponentSet>,
}

/// `GET /files/{key}/component_sets`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentSetsResponse {
    #[serde(default, deserialize_with = "null_default")]
    pub meta: ComponentSetsMeta,
}

/// `meta` of a styles listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StylesMeta {
    #[serde(default, deserialize_with = "null_default")]
    pub styles: Vec<RawStyle>,
}

/// `GET /files/{key}/styles`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StylesResponse {
    #[serde(default, deserialize_with = "null_default")]
    pub meta: StylesMeta,
}

// ============================================================================
// Projects
// ============================================================================

/// A team project
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawProject {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub created_at: Option<String>,
    pub modified_at: Option<String>,
}

/// `GET /teams/{id}/projects`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectsResponse {
    /// Team name
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub projects: Vec<RawProject>,
}

/// A file inside a project
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawProjectFile {
    pub key: Option<String>,
    pub name: Option<String>,
    pub thumbnail_url: Option<String>,
    pub last_modified: Option<String>,
    pub editor_type: Option<String>,
    pub project_name: Option<String>,
    /// Present only when `branch_data=true` was requested
    pub branches: Option<Vec<Value>>,
}

/// `GET /projects/{id}/files`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilesResponse {
    /// Project name
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub files: Vec<RawProjectFile>,
}

// ============================================================================
// Dev resources
// ============================================================================

/// A dev resource attached to a node
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDevResource {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub file_key: Option<String>,
    pub node_id: Option<String>,
}

/// `GET /files/{key}/dev_resources`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevResourcesResponse {
    #[serde(default, deserialize_with = "null_default")]
    pub dev_resources: Vec<RawDevResource>,
}

/// Per-item failure reported by the bulk endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DevResourceItemError {
    pub file_key: Option<String>,
    pub node_id: Option<String>,
    pub id: Option<String>,
    pub error: Option<String>,
}

/// `POST /dev_resources` and `PUT /dev_resources`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevResourcesMutationResponse {
    #[serde(default, deserialize_with = "null_default")]
    pub links_created: Vec<RawDevResource>,
    /// Updated ids; the element shape differs between API versions
    #[serde(default, deserialize_with = "null_default")]
    pub links_updated: Vec<Value>,
    #[serde(default, deserialize_with = "null_default")]
    pub errors: Vec<DevResourceItemError>,
}

impl DevResourcesMutationResponse {
    /// Text of the first per-item error, if any
    pub fn first_error(&self) -> Option<String> {
        self.errors
            .first()
            .map(|e| e.error.clone().unwrap_or_else(|| "Unknown error".to_string()))
    }
}

/// Payload item for `POST /dev_resources`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDevResource {
    pub file_key: String,
    pub node_id: String,
    pub name: String,
    pub url: String,
}

/// Payload item for `PUT /dev_resources`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevResourceUpdate {
    pub id: String,
    pub name: String,
    pub url: String,
}
