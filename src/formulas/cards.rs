//! Card formulas
//!
//! Look up one published entity by key. Only the first page of the upstream
//! listing is searched.

use crate::api::RawComponent;
use crate::connector::FigmaConnector;
use crate::error::{Error, Result, ResultExt};
use crate::mapper::{self, LinkStyle};
use crate::schema::{ComponentRow, ComponentSetRow, StyleRow};
use crate::urls;
use tracing::debug;

fn find_by_key<'a>(entities: &'a [RawComponent], key: &str) -> Option<&'a RawComponent> {
    entities.iter().find(|e| e.key.as_deref() == Some(key))
}

impl FigmaConnector {
    /// `ComponentCard`: searches the file named by `source_url`, then its team
    pub async fn component_card(
        &self,
        component_key: &str,
        source_url: Option<&str>,
    ) -> Result<ComponentRow> {
        let source = source_url.unwrap_or_default();

        if source.contains("/file/") || source.contains("/design/") {
            if let Some(file_key) = urls::file_key_hint(source) {
                match self.api().file_components(&file_key).await {
                    Ok(response) => {
                        if let Some(found) = find_by_key(&response.meta.components, component_key) {
                            return Ok(mapper::component(found, LinkStyle::Direct));
                        }
                    }
                    // Fall through to the team search
                    Err(e) => debug!("File search for component {component_key} failed: {e}"),
                }
            }
        }

        if source.contains("/team/") {
            if let Some(team_id) = urls::team_id_hint(source) {
                let response = self
                    .api()
                    .team_components(&team_id)
                    .await
                    .upstream("Failed to search team for component")?;
                if let Some(found) = find_by_key(&response.meta.components, component_key) {
                    return Ok(mapper::component(found, LinkStyle::Direct));
                }
            }
        }

        Err(Error::not_found(format!(
            "Component with key \"{component_key}\" not found. Make sure the component key is correct and you have access to the file or team containing it."
        )))
    }

    /// `StyleCard`
    pub async fn style_card(&self, style_key: &str, file_url: &str) -> Result<StyleRow> {
        let file_key = urls::require_file_key_hint(file_url)?;
        let response = self
            .api()
            .file_styles(&file_key)
            .await
            .upstream("Failed to fetch styles from file")?;

        response
            .meta
            .styles
            .iter()
            .find(|s| s.key.as_deref() == Some(style_key))
            .map(|s| mapper::style(s, LinkStyle::Direct))
            .ok_or_else(|| {
                Error::not_found(format!(
                    "Style with key \"{style_key}\" not found in the specified file."
                ))
            })
    }

    /// `ComponentSetCard`
    pub async fn component_set_card(
        &self,
        component_set_key: &str,
        file_url: &str,
    ) -> Result<ComponentSetRow> {
        let file_key = urls::require_file_key_hint(file_url)?;
        let response = self
            .api()
            .file_component_sets(&file_key)
            .await
            .upstream("Failed to fetch component sets from file")?;

        find_by_key(&response.meta.component_sets, component_set_key)
            .map(|cs| mapper::component_set(cs, LinkStyle::Direct))
            .ok_or_else(|| {
                Error::not_found(format!(
                    "Component set with key \"{component_set_key}\" not found in the specified file."
                ))
            })
    }
}
