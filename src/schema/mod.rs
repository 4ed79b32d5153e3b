//! Output schemas
//!
//! Row types returned by the formulas and the object schemas declared for
//! them in the formula catalog.
//!
//! # Features
//!
//! - **Rows**: one serializable struct per table or card result
//! - **Declared schemas**: id, display, title and featured properties
//! - **Value hints**: image references, date-times, URLs and references to
//!   rows of other sync tables

pub mod declared;
mod rows;
mod types;

pub use rows::{
    BranchInfo, BulkCreateResult, BulkUpdateResult, ComponentFrame, ComponentRow,
    ComponentSetFrame, ComponentSetRow, ConnectionInfo, DevResourceRef, DevResourceRow,
    EntityRef, ProjectFileRow, ProjectRow, StyleRow, TeamAccess, UserRef,
};
pub use types::{ObjectSchema, PropertySchema, ValueHint, ValueType};
