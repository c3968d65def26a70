//! Error taxonomy for report ingestion.
//!
//! Validation failures abort the whole report; repository and directory
//! lookup misses are ordinary branches handled at the call site and never
//! appear here.

use thiserror::Error;

/// Errors surfaced by the ingestion core.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A package or report field failed charset/length validation.
    #[error("schema violation in field '{field}': {reason}")]
    Schema { field: String, reason: String },

    /// Structurally valid report that breaks the role policy.
    #[error("policy violation: {0}")]
    Policy(String),

    /// A release identifier that is neither numeric nor "rawhide".
    #[error("'{0}' is not a valid release version")]
    InvalidRelease(String),

    /// A build completion time that does not match the fixed wire format.
    #[error("malformed completion time '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Transport failure from a release/component/build directory query.
    #[error("directory query failed: {0}")]
    Directory(#[source] anyhow::Error),

    /// Failure flushing the package repository.
    #[error("repository flush failed: {0}")]
    Storage(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
