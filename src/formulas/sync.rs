//! Sync table formulas
//!
//! Each formula performs one host-driven step: the caller's continuation in,
//! one page of rows and the next continuation out.

use super::now_iso;
use crate::api::{
    ComponentSetsResponse, ComponentsResponse, DevResourcesResponse, Endpoint,
    ProjectFilesResponse, ProjectsResponse, StylesResponse,
};
use crate::connector::FigmaConnector;
use crate::engine::{SyncDriver, SyncPage};
use crate::error::{Error, Result, ResultExt};
use crate::mapper::{self, LinkStyle};
use crate::pagination::{Continuation, NextPage};
use crate::resolve;
use crate::schema::{ComponentRow, ComponentSetRow, DevResourceRow, ProjectFileRow, ProjectRow, StyleRow};
use crate::urls;

const TEAM_PROJECTS_DENIED: &str = "Access denied to team projects. This may be due to: 1) Missing projects:read OAuth scope, 2) Limited API access (Projects API requires approval), or 3) Insufficient team permissions.";
const TEAM_PROJECTS_UNAVAILABLE: &str = "Projects API not available. The Figma Projects API requires special approval. Please request access at https://www.figma.com/developers/api#projects-endpoints or contact your Figma administrator.";
const PROJECT_FILES_DENIED: &str = "Access denied to project files. This may be due to: 1) Missing projects:read OAuth scope, 2) Limited API access (Projects API requires approval), or 3) Invalid project ID.";
const PROJECT_FILES_UNAVAILABLE: &str = "Project not found or Projects API not available. If the project ID is correct, the Figma Projects API may require special approval. Please request access at https://www.figma.com/developers/api#projects-endpoints.";

/// Projects API failures: 403 and 404 usually mean missing approval or scope
fn projects_error(err: Error, denied: &str, unavailable: &str, context: &str) -> Error {
    match err {
        Error::HttpStatus {
            status: 403,
            message,
        } => Error::Upstream {
            status: 403,
            message: format!("{denied} Error: {message}"),
        },
        Error::HttpStatus {
            status: 404,
            message,
        } => Error::Upstream {
            status: 404,
            message: format!("{unavailable} Error: {message}"),
        },
        other => other.into_upstream(context),
    }
}

impl FigmaConnector {
    /// `SyncTeamComponents`
    pub async fn sync_team_components(
        &self,
        team_url: &str,
        continuation: Option<&Continuation>,
    ) -> Result<SyncPage<ComponentRow>> {
        let team_id = urls::team_id(team_url)?;
        let driver = SyncDriver::new(self.api(), Endpoint::TeamComponents { team_id });
        let (response, next): (ComponentsResponse, NextPage) = driver
            .step(continuation)
            .await
            .upstream("Failed to access team components")?;

        let rows = response
            .meta
            .components
            .iter()
            .map(|c| mapper::component(c, LinkStyle::SyncRow))
            .collect();
        Ok(driver.finish(rows, next))
    }

    /// `SyncFileComponents`: components with the dev resources attached to them
    pub async fn sync_file_components(
        &self,
        file_url: &str,
        continuation: Option<&Continuation>,
    ) -> Result<SyncPage<ComponentRow>> {
        let file_key = urls::file_key(file_url)?;
        let driver = SyncDriver::new(
            self.api(),
            Endpoint::FileComponents {
                file_key: file_key.clone(),
            },
        );
        let (response, next): (ComponentsResponse, NextPage) = driver
            .step(continuation)
            .await
            .upstream("Failed to access file components")?;

        let dev_resources = resolve::dev_resource_index(self.api(), &file_key).await;
        let rows = response
            .meta
            .components
            .iter()
            .map(|c| {
                let mut row = mapper::component(c, LinkStyle::SyncRow);
                row.dev_resources = Some(resolve::dev_resources_for(&dev_resources, &row.node_id));
                row
            })
            .collect();
        Ok(driver.finish(rows, next))
    }

    /// `SyncFileStyles`
    pub async fn sync_file_styles(
        &self,
        file_url: &str,
        continuation: Option<&Continuation>,
    ) -> Result<SyncPage<StyleRow>> {
        let file_key = urls::file_key(file_url)?;
        let driver = SyncDriver::new(self.api(), Endpoint::FileStyles { file_key });
        let (response, next): (StylesResponse, NextPage) = driver
            .step(continuation)
            .await
            .upstream("Failed to access file styles")?;

        let rows = response
            .meta
            .styles
            .iter()
            .map(|s| mapper::style(s, LinkStyle::SyncRow))
            .collect();
        Ok(driver.finish(rows, next))
    }

    /// `SyncFileComponentSets`: component sets with their dev resources
    pub async fn sync_file_component_sets(
        &self,
        file_url: &str,
        continuation: Option<&Continuation>,
    ) -> Result<SyncPage<ComponentSetRow>> {
        let file_key = urls::file_key(file_url)?;
        let driver = SyncDriver::new(
            self.api(),
            Endpoint::FileComponentSets {
                file_key: file_key.clone(),
            },
        );
        let (response, next): (ComponentSetsResponse, NextPage) = driver
            .step(continuation)
            .await
            .upstream("Failed to access file component sets")?;

        let dev_resources = resolve::dev_resource_index(self.api(), &file_key).await;
        let rows = response
            .meta
            .component_sets
            .iter()
            .map(|cs| {
                let mut row = mapper::component_set(cs, LinkStyle::SyncRow);
                row.dev_resources = Some(resolve::dev_resources_for(&dev_resources, &row.node_id));
                row
            })
            .collect();
        Ok(driver.finish(rows, next))
    }

    /// `SyncTeamProjects`: always a single page
    pub async fn sync_team_projects(&self, team_url: &str) -> Result<SyncPage<ProjectRow>> {
        let team_id = urls::team_id(team_url)?;
        let driver = SyncDriver::new(
            self.api(),
            Endpoint::TeamProjects {
                team_id: team_id.clone(),
            },
        );
        let (response, next): (ProjectsResponse, NextPage) =
            driver.step(None).await.map_err(|e| {
                projects_error(
                    e,
                    TEAM_PROJECTS_DENIED,
                    TEAM_PROJECTS_UNAVAILABLE,
                    "Failed to access team projects",
                )
            })?;

        let rows = response
            .projects
            .iter()
            .map(|p| mapper::project(p, &team_id))
            .collect();
        Ok(driver.finish(rows, next))
    }

    /// `SyncProjectFiles`: always a single page
    pub async fn sync_project_files(
        &self,
        project_id: &str,
        include_branch_data: bool,
    ) -> Result<SyncPage<ProjectFileRow>> {
        if project_id.trim().is_empty() {
            return Err(Error::invalid_input(
                "Project ID is required. You can get project IDs from the TeamProjects sync table.",
            ));
        }

        let mut driver = SyncDriver::new(
            self.api(),
            Endpoint::ProjectFiles {
                project_id: project_id.to_string(),
            },
        );
        if include_branch_data {
            driver = driver.with_query("branch_data", "true");
        }
        let (response, next): (ProjectFilesResponse, NextPage) =
            driver.step(None).await.map_err(|e| {
                projects_error(
                    e,
                    PROJECT_FILES_DENIED,
                    PROJECT_FILES_UNAVAILABLE,
                    "Failed to access project files",
                )
            })?;

        let project_name = response.name.as_deref();
        let rows = response
            .files
            .iter()
            .map(|f| mapper::project_file(f, project_id, project_name))
            .collect();
        Ok(driver.finish(rows, next))
    }

    /// `SyncDevResources`: dev resources with the component or component set
    /// living on the same node
    pub async fn sync_dev_resources(
        &self,
        file_url: &str,
        node_ids: Option<&str>,
    ) -> Result<SyncPage<DevResourceRow>> {
        let file_key = urls::require_file_key_hint(file_url)?;
        let mut driver = SyncDriver::new(
            self.api(),
            Endpoint::FileDevResources {
                file_key: file_key.clone(),
            },
        );
        if let Some(ids) = node_ids.filter(|ids| !ids.is_empty()) {
            driver = driver.with_query("node_ids", ids);
        }
        let (response, next): (DevResourcesResponse, NextPage) = driver
            .step(None)
            .await
            .upstream("Failed to fetch dev resources")?;

        let components = resolve::component_index(self.api(), &file_key).await;
        let component_sets = resolve::component_set_index(self.api(), &file_key).await;
        let now = now_iso();

        let rows = response
            .dev_resources
            .iter()
            .map(|resource| {
                let mut row = mapper::dev_resource(resource, &now);
                row.component = resolve::reference_for(&components, &row.node_id);
                row.component_set = resolve::reference_for(&component_sets, &row.node_id);
                row
            })
            .collect();
        Ok(driver.finish(rows, next))
    }
}
