//! Pagination module
//!
//! Supports: Cursor (`meta.cursor.after`), single page
//!
//! # Overview
//!
//! A sync step is host-driven: the connector fetches one page, and the
//! paginator decides whether a continuation is handed back to the host.
//! The host invokes the next step with that continuation, or stops when
//! none is returned.

mod strategies;
mod types;

pub use strategies::{build_paginator, CursorPaginator, NoPaginator};
pub use types::{
    extract_path, extract_string, Continuation, NextPage, PaginationConfig, Paginator,
};

#[cfg(test)]
mod tests;
