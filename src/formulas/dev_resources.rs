//! Dev resource actions

use super::now_iso;
use crate::api::{DevResourceUpdate, NewDevResource};
use crate::connector::FigmaConnector;
use crate::error::{Error, Result, ResultExt};
use crate::mapper;
use crate::schema::{BulkCreateResult, BulkUpdateResult, DevResourceRow};
use tracing::info;

/// Bulk arguments must line up item by item
fn check_lengths(lengths: &[usize]) -> Result<()> {
    if lengths.windows(2).any(|pair| pair[0] != pair[1]) {
        return Err(Error::invalid_input("All arrays must have the same length"));
    }
    Ok(())
}

impl FigmaConnector {
    /// `CreateDevResource`
    pub async fn create_dev_resource(&self, item: NewDevResource) -> Result<DevResourceRow> {
        let response = self
            .api()
            .create_dev_resources(std::slice::from_ref(&item))
            .await
            .upstream("Failed to create dev resource")?;

        if let Some(error) = response.first_error() {
            return Err(Error::rejected(format!(
                "Failed to create dev resource: {error}"
            )));
        }

        let created = response
            .links_created
            .first()
            .ok_or_else(|| Error::rejected("Dev resource creation failed - no resource returned"))?;

        info!("Created dev resource on node {} of {}", item.node_id, item.file_key);
        Ok(mapper::dev_resource(created, &now_iso()))
    }

    /// `UpdateDevResource`
    pub async fn update_dev_resource(&self, update: DevResourceUpdate) -> Result<String> {
        let response = self
            .api()
            .update_dev_resources(std::slice::from_ref(&update))
            .await
            .upstream("Failed to update dev resource")?;

        if let Some(error) = response.first_error() {
            return Err(Error::rejected(format!(
                "Failed to update dev resource: {error}"
            )));
        }
        if response.links_updated.is_empty() {
            return Err(Error::rejected(
                "Dev resource update failed - no confirmation returned",
            ));
        }

        Ok(format!("Successfully updated dev resource: {}", update.id))
    }

    /// `DeleteDevResource`
    pub async fn delete_dev_resource(&self, file_key: &str, resource_id: &str) -> Result<String> {
        self.api()
            .delete_dev_resource(file_key, resource_id)
            .await
            .upstream("Failed to delete dev resource")?;

        Ok(format!("Successfully deleted dev resource: {resource_id}"))
    }

    /// `BulkCreateDevResources`
    pub async fn bulk_create_dev_resources(
        &self,
        file_keys: Vec<String>,
        node_ids: Vec<String>,
        names: Vec<String>,
        urls: Vec<String>,
    ) -> Result<BulkCreateResult> {
        check_lengths(&[file_keys.len(), node_ids.len(), names.len(), urls.len()])?;

        let items: Vec<NewDevResource> = file_keys
            .into_iter()
            .zip(node_ids)
            .zip(names)
            .zip(urls)
            .map(|(((file_key, node_id), name), url)| NewDevResource {
                file_key,
                node_id,
                name,
                url,
            })
            .collect();

        let response = self
            .api()
            .create_dev_resources(&items)
            .await
            .upstream("Failed to create dev resources")?;

        let result = BulkCreateResult::new(
            response.links_created.len() as u64,
            response.errors.len() as u64,
        );
        info!("{}", result.details);
        Ok(result)
    }

    /// `BulkUpdateDevResources`
    pub async fn bulk_update_dev_resources(
        &self,
        resource_ids: Vec<String>,
        names: Vec<String>,
        urls: Vec<String>,
    ) -> Result<BulkUpdateResult> {
        check_lengths(&[resource_ids.len(), names.len(), urls.len()])?;

        let items: Vec<DevResourceUpdate> = resource_ids
            .into_iter()
            .zip(names)
            .zip(urls)
            .map(|((id, name), url)| DevResourceUpdate { id, name, url })
            .collect();

        let response = self
            .api()
            .update_dev_resources(&items)
            .await
            .upstream("Failed to update dev resources")?;

        let result = BulkUpdateResult::new(
            response.links_updated.len() as u64,
            response.errors.len() as u64,
        );
        info!("{}", result.details);
        Ok(result)
    }
}
