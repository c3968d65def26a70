//! Pipeline orchestration module.
//!
//! Report intake workflow:
//! - Validation gates (schema, then policy)
//! - Desktop usage aggregation
//! - Package reconciliation against the catalog
//! - Flush boundary control

pub mod context;
pub mod ingestion;
pub mod reconcile;

pub use context::*;
pub use ingestion::*;
pub use reconcile::*;
