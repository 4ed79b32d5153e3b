//! Upstream endpoint catalog

use crate::pagination::PaginationConfig;
use crate::types::Method;

/// Every Figma REST endpoint the connector calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /me`
    Me,
    /// `GET /teams/{team_id}/components`
    TeamComponents { team_id: String },
    /// `GET /teams/{team_id}/projects`
    TeamProjects { team_id: String },
    /// `GET /files/{file_key}/components`
    FileComponents { file_key: String },
    /// `GET /files/{file_key}/styles`
    FileStyles { file_key: String },
    /// `GET /files/{file_key}/component_sets`
    FileComponentSets { file_key: String },
    /// `GET /files/{file_key}/dev_resources`
    FileDevResources { file_key: String },
    /// `GET /projects/{project_id}/files`
    ProjectFiles { project_id: String },
    /// `POST /dev_resources`
    CreateDevResources,
    /// `PUT /dev_resources`
    UpdateDevResources,
    /// `DELETE /files/{file_key}/dev_resources/{resource_id}`
    DeleteDevResource {
        file_key: String,
        resource_id: String,
    },
}

impl Endpoint {
    /// Path relative to the API base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::Me => "me".to_string(),
            Endpoint::TeamComponents { team_id } => format!("teams/{}/components", seg(team_id)),
            Endpoint::TeamProjects { team_id } => format!("teams/{}/projects", seg(team_id)),
            Endpoint::FileComponents { file_key } => format!("files/{}/components", seg(file_key)),
            Endpoint::FileStyles { file_key } => format!("files/{}/styles", seg(file_key)),
            Endpoint::FileComponentSets { file_key } => {
                format!("files/{}/component_sets", seg(file_key))
            }
            Endpoint::FileDevResources { file_key } => {
                format!("files/{}/dev_resources", seg(file_key))
            }
            Endpoint::ProjectFiles { project_id } => format!("projects/{}/files", seg(project_id)),
            Endpoint::CreateDevResources | Endpoint::UpdateDevResources => {
                "dev_resources".to_string()
            }
            Endpoint::DeleteDevResource {
                file_key,
                resource_id,
            } => format!(
                "files/{}/dev_resources/{}",
                seg(file_key),
                seg(resource_id)
            ),
        }
    }

    /// HTTP method used for the endpoint
    pub fn method(&self) -> Method {
        match self {
            Endpoint::CreateDevResources => Method::POST,
            Endpoint::UpdateDevResources => Method::PUT,
            Endpoint::DeleteDevResource { .. } => Method::DELETE,
            _ => Method::GET,
        }
    }

    /// Pagination contract of the endpoint
    ///
    /// The Projects API documents no pagination, and dev resources come back
    /// in a single response.
    pub fn pagination(&self) -> PaginationConfig {
        match self {
            Endpoint::TeamComponents { .. }
            | Endpoint::FileComponents { .. }
            | Endpoint::FileStyles { .. }
            | Endpoint::FileComponentSets { .. } => PaginationConfig::figma_cursor(),
            _ => PaginationConfig::None,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} /{}", self.method(), self.path())
    }
}

/// Escape a caller-supplied path segment
fn seg(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}
