//! uReport Core - Package reconciliation and release mapping
//!
//! This crate provides the reconciliation engine behind a Linux
//! distribution's crash-report intake. Incoming uReports carry a package
//! list and release metadata; the engine validates them, matches every
//! package against the known-package catalog, and keeps aggregate counts
//! used for bug triage and release health metrics.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `pipeline` - Report intake orchestrator and package reconciler
//! - `validation` - Schema and role-policy validation
//! - `storage` - Catalog/aggregate models and the repository abstraction
//! - `releases` - Branch mapping, ignore filtering, directory consumption
//! - `components` - Component lists and owner/watcher ACL merging
//! - `builds` - Two-tag build queries merged into one ordered feed
//! - `config` - Explicit immutable intake configuration
//! - `logging` - Structured logging with ingest context
//!
//! External collaborators (package repository, release directory, component
//! directory, build tag source) are traits; transports stay outside the
//! crate. Everything here runs synchronously, and aggregate durability is
//! controlled through the repository's flush boundary.

pub mod builds;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod releases;
pub mod storage;
pub mod validation;

pub use builds::{released_builds, BuildRecord, BuildTagSource};
pub use components::{component_acls, release_components, ComponentAcl, ComponentDirectory};
pub use config::SystemConfig;
pub use error::IngestError;
pub use pipeline::{ingest_report, parse_ureport, IngestContext, ReportOutcome, UReport};
pub use releases::{collect_releases, release_to_branch, ReleaseDirectory, ReleaseFilter};
pub use storage::{MemoryRepository, PackageRecord, PackageRepository, ReportId, ReportPayload};

/// Initialize the module-level logger
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}
