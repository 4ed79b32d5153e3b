//! Pagination strategy implementations
//!
//! Each strategy handles a specific pagination pattern.

use super::types::{extract_string, Continuation, NextPage, PaginationConfig, Paginator};
use serde_json::Value;

// ============================================================================
// Cursor Pagination
// ============================================================================

/// Cursor-based pagination
///
/// Figma list endpoints answer with `meta.cursor.after` when more results
/// exist; the next request carries it back as `?after=`.
#[derive(Debug, Clone)]
pub struct CursorPaginator {
    /// Query parameter name for cursor
    pub cursor_param: String,
    /// Dotted path to extract cursor from response
    pub cursor_path: String,
}

impl CursorPaginator {
    /// Create a new cursor paginator
    pub fn new(cursor_param: impl Into<String>, cursor_path: impl Into<String>) -> Self {
        Self {
            cursor_param: cursor_param.into(),
            cursor_path: cursor_path.into(),
        }
    }
}

impl Default for CursorPaginator {
    fn default() -> Self {
        Self::new("after", "meta.cursor.after")
    }
}

impl Paginator for CursorPaginator {
    fn request_params(&self, continuation: Option<&Continuation>) -> Vec<(String, String)> {
        continuation
            .filter(|c| !c.after.is_empty())
            .map(|c| vec![(self.cursor_param.clone(), c.after.clone())])
            .unwrap_or_default()
    }

    fn process_response(&self, body: &Value) -> NextPage {
        match extract_string(body, &self.cursor_path) {
            Some(cursor) if !cursor.is_empty() => NextPage::Continue(Continuation::after(cursor)),
            _ => NextPage::Done,
        }
    }
}

// ============================================================================
// No Pagination
// ============================================================================

/// Single-page endpoints: always exhausted after the first response
#[derive(Debug, Clone, Default)]
pub struct NoPaginator;

impl Paginator for NoPaginator {
    fn request_params(&self, _continuation: Option<&Continuation>) -> Vec<(String, String)> {
        Vec::new()
    }

    fn process_response(&self, _body: &Value) -> NextPage {
        NextPage::Done
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Build the paginator for a pagination config
pub fn build_paginator(config: &PaginationConfig) -> Box<dyn Paginator> {
    match config {
        PaginationConfig::None => Box::new(NoPaginator),
        PaginationConfig::Cursor {
            cursor_param,
            cursor_path,
        } => Box::new(CursorPaginator::new(cursor_param, cursor_path)),
    }
}
