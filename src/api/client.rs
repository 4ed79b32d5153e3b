//! Typed access to the Figma REST API

use super::endpoints::Endpoint;
use super::models::{
    ComponentSetsResponse, ComponentsResponse, DevResourceUpdate, DevResourcesMutationResponse,
    DevResourcesResponse, MeResponse, NewDevResource, StylesResponse,
};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Figma API facade over the single-attempt HTTP client
#[derive(Debug)]
pub struct FigmaApi {
    http: HttpClient,
}

impl FigmaApi {
    /// Wrap an HTTP client
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Issue a request against an endpoint and decode the response
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        config: RequestConfig,
    ) -> Result<T> {
        self.http
            .request_json(endpoint.method(), &endpoint.path(), config)
            .await
    }

    /// Fetch one page of an endpoint as raw JSON
    pub async fn get_page(&self, endpoint: &Endpoint, query: Vec<(String, String)>) -> Result<Value> {
        let config = RequestConfig {
            query,
            ..RequestConfig::default()
        };
        self.call(endpoint, config).await
    }

    /// `GET /me`
    pub async fn me(&self) -> Result<MeResponse> {
        self.call(&Endpoint::Me, RequestConfig::new()).await
    }

    /// First page of `GET /teams/{id}/components`
    pub async fn team_components(&self, team_id: &str) -> Result<ComponentsResponse> {
        let endpoint = Endpoint::TeamComponents {
            team_id: team_id.to_string(),
        };
        self.call(&endpoint, RequestConfig::new()).await
    }

    /// First page of `GET /files/{key}/components`
    pub async fn file_components(&self, file_key: &str) -> Result<ComponentsResponse> {
        let endpoint = Endpoint::FileComponents {
            file_key: file_key.to_string(),
        };
        self.call(&endpoint, RequestConfig::new()).await
    }

    /// First page of `GET /files/{key}/styles`
    pub async fn file_styles(&self, file_key: &str) -> Result<StylesResponse> {
        let endpoint = Endpoint::FileStyles {
            file_key: file_key.to_string(),
        };
        self.call(&endpoint, RequestConfig::new()).await
    }

    /// First page of `GET /files/{key}/component_sets`
    pub async fn file_component_sets(&self, file_key: &str) -> Result<ComponentSetsResponse> {
        let endpoint = Endpoint::FileComponentSets {
            file_key: file_key.to_string(),
        };
        self.call(&endpoint, RequestConfig::new()).await
    }

    /// `GET /files/{key}/dev_resources`, optionally filtered by node ids
    pub async fn file_dev_resources(
        &self,
        file_key: &str,
        node_ids: Option<&str>,
    ) -> Result<DevResourcesResponse> {
        let endpoint = Endpoint::FileDevResources {
            file_key: file_key.to_string(),
        };
        let mut config = RequestConfig::new();
        if let Some(ids) = node_ids.filter(|ids| !ids.is_empty()) {
            config = config.query("node_ids", ids);
        }
        self.call(&endpoint, config).await
    }

    /// `POST /dev_resources`
    pub async fn create_dev_resources(
        &self,
        items: &[NewDevResource],
    ) -> Result<DevResourcesMutationResponse> {
        let config = RequestConfig::new().json(json!({ "dev_resources": items }));
        self.call(&Endpoint::CreateDevResources, config).await
    }

    /// `PUT /dev_resources`
    pub async fn update_dev_resources(
        &self,
        items: &[DevResourceUpdate],
    ) -> Result<DevResourcesMutationResponse> {
        let config = RequestConfig::new().json(json!({ "dev_resources": items }));
        self.call(&Endpoint::UpdateDevResources, config).await
    }

    /// `DELETE /files/{key}/dev_resources/{id}`
    pub async fn delete_dev_resource(&self, file_key: &str, resource_id: &str) -> Result<()> {
        let endpoint = Endpoint::DeleteDevResource {
            file_key: file_key.to_string(),
            resource_id: resource_id.to_string(),
        };
        self.http
            .request(endpoint.method(), &endpoint.path(), RequestConfig::new())
            .await?;
        Ok(())
    }
}
