//! Pagination types and traits
//!
//! Defines the continuation token exchanged with the host and the
//! two-state result of processing a page.

use crate::types::scalar_to_string;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque token handed back to the host between sync steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continuation {
    /// Upstream cursor, sent back as the `after` query parameter
    pub after: String,
}

impl Continuation {
    /// Create a continuation from a cursor value
    pub fn after(cursor: impl Into<String>) -> Self {
        Self {
            after: cursor.into(),
        }
    }
}

/// Result of processing a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// has-cursor: the host should invoke the step again with this token
    Continue(Continuation),
    /// exhausted: no further page is requested
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// The continuation to return to the host, if any
    pub fn into_continuation(self) -> Option<Continuation> {
        match self {
            Self::Continue(continuation) => Some(continuation),
            Self::Done => None,
        }
    }
}

/// Pagination behaviour declared per endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PaginationConfig {
    /// Single page; the endpoint has no pagination contract
    #[default]
    None,

    /// Cursor-based pagination
    Cursor {
        /// Query parameter name for the cursor (e.g., "after")
        cursor_param: String,
        /// Dotted path to the next cursor in the response body
        cursor_path: String,
    },
}

impl PaginationConfig {
    /// Create cursor pagination config
    pub fn cursor(cursor_param: impl Into<String>, cursor_path: impl Into<String>) -> Self {
        Self::Cursor {
            cursor_param: cursor_param.into(),
            cursor_path: cursor_path.into(),
        }
    }

    /// Figma's `meta.cursor.after` convention
    pub fn figma_cursor() -> Self {
        Self::cursor("after", "meta.cursor.after")
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Query parameters for the request made with the given continuation
    fn request_params(&self, continuation: Option<&Continuation>) -> Vec<(String, String)>;

    /// Decide from a response body whether another page exists
    fn process_response(&self, body: &Value) -> NextPage;
}

/// Follow a dotted path (`$.a.b` or `a.b`) into a JSON value
pub fn extract_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

/// Extract a scalar at a dotted path as a string
pub fn extract_string(value: &Value, path: &str) -> Option<String> {
    extract_path(value, path).and_then(scalar_to_string)
}
