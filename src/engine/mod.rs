//! Execution engine module
//!
//! Paginated sync driver and host-style page iteration.
//!
//! # Overview
//!
//! The engine module provides:
//! - `SyncDriver` - one sync step against a listing endpoint: request with the
//!   caller's continuation, decode, and decide has-cursor or exhausted
//! - `pages` - feeds each continuation back into the next step until
//!   exhaustion, the way a host drives a sync table
//! - `drain` - consumes a page stream under an optional page budget
//! - `SyncPage`, `SyncStats` - step output and run statistics

mod types;

pub use types::{SyncPage, SyncStats};

use crate::api::{Endpoint, FigmaApi};
use crate::error::Result;
use crate::pagination::{build_paginator, Continuation, NextPage, Paginator};
use futures::{stream, Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Instant;
use tracing::{debug, info};

/// Sync driver for a single listing endpoint
pub struct SyncDriver<'a> {
    /// Upstream API
    api: &'a FigmaApi,
    /// Endpoint being listed
    endpoint: Endpoint,
    /// Pagination strategy declared by the endpoint
    paginator: Box<dyn Paginator>,
    /// Query parameters sent with every page
    query: Vec<(String, String)>,
}

impl<'a> SyncDriver<'a> {
    /// Create a driver using the endpoint's pagination contract
    pub fn new(api: &'a FigmaApi, endpoint: Endpoint) -> Self {
        let paginator = build_paginator(&endpoint.pagination());
        Self {
            api,
            endpoint,
            paginator,
            query: Vec::new(),
        }
    }

    /// Add a query parameter sent with every page
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Fetch and decode one page
    ///
    /// A failed fetch aborts the step; no partial page is returned.
    pub async fn step<T: DeserializeOwned>(
        &self,
        continuation: Option<&Continuation>,
    ) -> Result<(T, NextPage)> {
        let mut query = self.query.clone();
        query.extend(self.paginator.request_params(continuation));
        debug!(
            "Sync step {} (continuation: {:?})",
            self.endpoint,
            continuation.map(|c| c.after.as_str())
        );

        let body = self.api.get_page(&self.endpoint, query).await?;
        let next = self.paginator.process_response(&body);
        let decoded = serde_json::from_value(body)?;

        Ok((decoded, next))
    }

    /// Assemble the page handed back to the host
    pub fn finish<T>(&self, rows: Vec<T>, next: NextPage) -> SyncPage<T> {
        info!(
            "Synced {} rows from {}{}",
            rows.len(),
            self.endpoint,
            if next.is_continue() { ", more pages pending" } else { "" }
        );
        SyncPage::new(rows, next.into_continuation())
    }
}

/// Drive a sync step until the upstream is exhausted
///
/// `step` receives the continuation of the previous page (`None` first) and
/// is invoked again only while pages carry a continuation.
pub fn pages<T, F, Fut>(start: Option<Continuation>, step: F) -> impl Stream<Item = Result<SyncPage<T>>>
where
    F: FnMut(Option<Continuation>) -> Fut,
    Fut: Future<Output = Result<SyncPage<T>>>,
{
    stream::try_unfold((Some(start), step), |(pending, mut step)| async move {
        let Some(continuation) = pending else {
            return Ok(None);
        };
        let page = step(continuation).await?;
        let next = page.continuation.clone().map(Some);
        Ok(Some((page, (next, step))))
    })
}

/// Hand every page of a sync to `on_page`, stopping early after `max_pages` if set
///
/// Returns the continuation to resume from (`None` once the upstream is
/// exhausted) together with the run statistics.
pub async fn drain<T, S, F>(
    pages: S,
    max_pages: Option<usize>,
    mut on_page: F,
) -> Result<(Option<Continuation>, SyncStats)>
where
    S: Stream<Item = Result<SyncPage<T>>>,
    F: FnMut(SyncPage<T>),
{
    let start = Instant::now();
    let mut stats = SyncStats::new();
    let mut resume = None;

    futures::pin_mut!(pages);
    while let Some(page) = pages.try_next().await? {
        stats.record(&page);
        resume = page.continuation.clone();
        on_page(page);

        if resume.is_some() && max_pages.is_some_and(|max| stats.pages_fetched >= max) {
            stats.truncated = true;
            break;
        }
    }

    stats.set_duration(start.elapsed().as_millis() as u64);
    Ok((resume, stats))
}

#[cfg(test)]
mod tests;
