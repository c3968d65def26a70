//! Structured logging utilities.
//!
//! Provides context-aware logging with ingest_id and report_id included
//! in every log message.

use std::fmt;

/// Logging context for one ingestion pass.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub ingest_id: String,
    pub report_id: Option<String>,
}

impl LogContext {
    pub fn new(ingest_id: &str) -> Self {
        Self {
            ingest_id: ingest_id.to_string(),
            report_id: None,
        }
    }

    pub fn with_report(&self, report_id: impl fmt::Display) -> Self {
        Self {
            ingest_id: self.ingest_id.clone(),
            report_id: Some(report_id.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.report_id {
            Some(rid) => write!(f, "[ingest={}] [report={}]", self.ingest_id, rid),
            None => write!(f, "[ingest={}]", self.ingest_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_display() {
        let ctx = LogContext::new("ingest-123");
        assert_eq!(format!("{}", ctx), "[ingest=ingest-123]");

        let ctx_with_report = ctx.with_report(456);
        assert_eq!(
            format!("{}", ctx_with_report),
            "[ingest=ingest-123] [report=456]"
        );
    }
}
