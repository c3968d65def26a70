//! Pipeline context management.
//!
//! Provides a per-ingest context for logging and state tracking.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logging::structured::LogContext;
use crate::storage::models::ReportId;

/// Context for one ingestion pass over one or more reports.
#[derive(Debug, Clone)]
pub struct IngestContext {
    pub ingest_id: String,
    pub received_at: DateTime<Utc>,
}

impl IngestContext {
    pub fn new() -> Self {
        Self {
            ingest_id: format!("ingest-{}", &Uuid::new_v4().to_string()[..8]),
            received_at: Utc::now(),
        }
    }

    /// Create a logging context scoped to one report.
    pub fn log_context(&self, report: ReportId) -> LogContext {
        LogContext::new(&self.ingest_id).with_report(report)
    }
}

impl Default for IngestContext {
    fn default() -> Self {
        Self::new()
    }
}
