//! Taxonomy - a single-rooted hierarchy of serious error kinds
//!
//! Errors are classified by *name* against a fixed tree of kinds, gated on a
//! realm marker, so values built by a different copy of this crate still
//! classify correctly.

// Core modules
pub mod error;
pub mod kind;
pub mod realm;

// Main functionality modules
pub mod instance;
pub mod json;
pub mod matcher;

// Re-export main types for convenience
pub use error::{Result, TaxonomyError};
pub use instance::{Detail, Query, QueryInfo, SeriousError};
pub use json::ErrorJson;
pub use kind::{parent_name, Ancestors, Kind};
pub use matcher::{is_tagged, matches, matches_kind, resolve_kind, MAX_CHAIN_HOPS};
pub use realm::{ErrorLike, Foreign, Stack, REALM_MARKER};
