//! Cross-reference resolver
//!
//! Builds node-id keyed lookups from auxiliary endpoint calls so that rows of
//! one entity type can point at rows of another. An auxiliary fetch that
//! fails does not fail the sync: it yields [`Unavailable`] and dependent
//! fields stay empty.

use crate::api::{FigmaApi, RawComponent, RawDevResource};
use crate::schema::{DevResourceRef, EntityRef};
use std::collections::HashMap;
use tracing::{debug, warn};

/// An auxiliary lookup could not be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unavailable {
    /// What was being fetched
    pub source: &'static str,
    /// Why it failed
    pub reason: String,
}

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} unavailable: {}", self.source, self.reason)
    }
}

/// Outcome of building an auxiliary lookup
pub type Lookup<T> = Result<T, Unavailable>;

// ============================================================================
// Indexes
// ============================================================================

/// node_id → dev resources attached to that node
#[derive(Debug, Clone, Default)]
pub struct DevResourceIndex {
    by_node: HashMap<String, Vec<DevResourceRef>>,
}

impl DevResourceIndex {
    /// Group dev resources by node, keeping upstream order within a node
    pub fn build(resources: &[RawDevResource]) -> Self {
        let mut by_node: HashMap<String, Vec<DevResourceRef>> = HashMap::new();
        for resource in resources {
            let Some(node_id) = resource.node_id.as_deref().filter(|n| !n.is_empty()) else {
                continue;
            };
            by_node
                .entry(node_id.to_string())
                .or_default()
                .push(DevResourceRef {
                    id: resource.id.clone().unwrap_or_default(),
                    name: resource.name.clone().unwrap_or_default(),
                });
        }
        Self { by_node }
    }

    /// Dev resources of a node (empty when none are attached)
    pub fn for_node(&self, node_id: &str) -> Vec<DevResourceRef> {
        self.by_node.get(node_id).cloned().unwrap_or_default()
    }

    /// Number of nodes with at least one dev resource
    pub fn len(&self) -> usize {
        self.by_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_node.is_empty()
    }
}

/// node_id → component or component set identity
#[derive(Debug, Clone, Default)]
pub struct EntityIndex {
    by_node: HashMap<String, EntityRef>,
}

impl EntityIndex {
    /// Index published entities by node; a later entry for the same node wins
    pub fn build(entities: &[RawComponent]) -> Self {
        let by_node = entities
            .iter()
            .filter_map(|entity| {
                let node_id = entity.node_id.as_deref().filter(|n| !n.is_empty())?;
                Some((
                    node_id.to_string(),
                    EntityRef {
                        key: entity.key.clone().unwrap_or_default(),
                        name: entity.name.clone().unwrap_or_default(),
                    },
                ))
            })
            .collect();
        Self { by_node }
    }

    /// Reference for a node, if a known entity lives there
    pub fn get(&self, node_id: &str) -> Option<EntityRef> {
        self.by_node.get(node_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.by_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_node.is_empty()
    }
}

// ============================================================================
// Resolution against a lookup
// ============================================================================

/// Dev resources for a row; an unavailable index resolves to an empty list
pub fn dev_resources_for(lookup: &Lookup<DevResourceIndex>, node_id: &str) -> Vec<DevResourceRef> {
    lookup
        .as_ref()
        .map(|index| index.for_node(node_id))
        .unwrap_or_default()
}

/// Entity reference for a row; an unavailable index resolves to none
pub fn reference_for(lookup: &Lookup<EntityIndex>, node_id: &str) -> Option<EntityRef> {
    lookup.as_ref().ok().and_then(|index| index.get(node_id))
}

// ============================================================================
// Auxiliary fetches
// ============================================================================

fn unavailable(source: &'static str, file_key: &str, err: impl std::fmt::Display) -> Unavailable {
    let unavailable = Unavailable {
        source,
        reason: err.to_string(),
    };
    warn!("Could not fetch {source} for file {file_key}: {}", unavailable.reason);
    unavailable
}

/// Dev resources of a file, indexed by node
pub async fn dev_resource_index(api: &FigmaApi, file_key: &str) -> Lookup<DevResourceIndex> {
    match api.file_dev_resources(file_key, None).await {
        Ok(response) => {
            let index = DevResourceIndex::build(&response.dev_resources);
            debug!("Indexed dev resources of {} nodes in {file_key}", index.len());
            Ok(index)
        }
        Err(e) => Err(unavailable("dev resources", file_key, e)),
    }
}

/// First page of a file's components, indexed by node
pub async fn component_index(api: &FigmaApi, file_key: &str) -> Lookup<EntityIndex> {
    match api.file_components(file_key).await {
        Ok(response) => Ok(EntityIndex::build(&response.meta.components)),
        Err(e) => Err(unavailable("components", file_key, e)),
    }
}

/// First page of a file's component sets, indexed by node
pub async fn component_set_index(api: &FigmaApi, file_key: &str) -> Lookup<EntityIndex> {
    match api.file_component_sets(file_key).await {
        Ok(response) => Ok(EntityIndex::build(&response.meta.component_sets)),
        Err(e) => Err(unavailable("component sets", file_key, e)),
    }
}
