//! Engine types
//!
//! Page and statistics types for the sync driver.

use crate::pagination::Continuation;
use serde::{Deserialize, Serialize};

/// One sync step's output: rows plus the token for the next step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPage<T> {
    /// Rows of this page
    pub result: Vec<T>,
    /// Present while the upstream reports more pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation: Option<Continuation>,
}

impl<T> SyncPage<T> {
    /// Create a page
    pub fn new(result: Vec<T>, continuation: Option<Continuation>) -> Self {
        Self {
            result,
            continuation,
        }
    }

    /// A page with no continuation
    pub fn last(result: Vec<T>) -> Self {
        Self::new(result, None)
    }

    /// Check if the host should stop after this page
    pub fn is_last(&self) -> bool {
        self.continuation.is_none()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}

/// Statistics from a sync run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStats {
    /// Total records synced
    pub records_synced: usize,
    /// Total pages fetched
    pub pages_fetched: usize,
    /// Whether the run stopped before the upstream was exhausted
    pub truncated: bool,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl SyncStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add records
    pub fn add_records(&mut self, count: usize) {
        self.records_synced += count;
    }

    /// Add a page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Count a page and its rows
    pub fn record<T>(&mut self, page: &SyncPage<T>) {
        self.add_page();
        self.add_records(page.len());
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
