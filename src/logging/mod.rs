//! Structured logging with ingest context.
//!
//! Provides a display-prefix context so ingest_id and report_id appear
//! in every log message for easy correlation.

pub mod structured;

pub use structured::*;
