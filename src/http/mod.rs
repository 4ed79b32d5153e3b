//! HTTP client module
//!
//! Provides the single-attempt client used for every upstream call.
//!
//! # Features
//!
//! - **One attempt per call**: no retries, no backoff
//! - **Status mapping**: non-2xx responses carry the upstream message
//! - **Authentication**: Integration with auth module

mod client;

pub use client::{
    status_message, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig,
    FIGMA_API_BASE_URL,
};
