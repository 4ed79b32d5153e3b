//! Figma REST API module
//!
//! # Overview
//!
//! - `Endpoint` - every upstream path the connector calls, with its method
//!   and pagination contract
//! - `models` - raw response records with optional fields
//! - `FigmaApi` - typed calls over the HTTP client

mod client;
mod endpoints;
mod models;

pub use client::FigmaApi;
pub use endpoints::Endpoint;
pub use models::{
    ComponentSetsMeta, ComponentSetsResponse, ComponentsMeta, ComponentsResponse,
    DevResourceItemError, DevResourceUpdate, DevResourcesMutationResponse, DevResourcesResponse,
    MeResponse, NewDevResource, ProjectFilesResponse, ProjectsResponse, RawComponent,
    RawComponentSet, RawDevResource, RawFrame, RawProject, RawProjectFile, RawStyle, RawUser,
    StylesMeta, StylesResponse,
};
