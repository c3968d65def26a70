//! Report intake orchestration.
//!
//! Coordinates one report's processing:
//! 1. Schema validation of report metadata and package list
//! 2. Role policy check
//! 3. Desktop usage aggregation (when the release is known)
//! 4. Package reconciliation
//! 5. Optional repository flush

use regex::Regex;
use serde::Deserialize;

use crate::config::SystemConfig;
use crate::error::{IngestError, Result};
use crate::pipeline::context::IngestContext;
use crate::pipeline::reconcile::{reconcile_packages, ReconcileStats};
use crate::storage::models::{PackageRecord, ReportId, ReportPayload};
use crate::storage::repository::PackageRepository;
use crate::validation::policy::check_roles;
use crate::validation::schema::{validate_packages, validate_report};

/// Wire shape of a submitted uReport.
#[derive(Debug, Clone, Deserialize)]
pub struct UReport {
    pub os: ReportPayload,
    #[serde(default)]
    pub packages: Vec<PackageRecord>,
}

/// What one report's intake produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOutcome {
    pub stats: ReconcileStats,
    pub desktop_recorded: bool,
}

/// Parse a serialized uReport.
pub fn parse_ureport(json: &str) -> Result<UReport> {
    serde_json::from_str(json).map_err(|e| IngestError::Schema {
        field: "ureport".to_string(),
        reason: format!("JSON parse error: {}", e),
    })
}

/// Validate and save one report.
///
/// Fails before any mutation on a schema or policy violation; afterwards
/// aggregation itself cannot fail (lookup misses are handled locally).
pub fn ingest_report(
    repo: &mut dyn PackageRepository,
    ctx: &IngestContext,
    config: &SystemConfig,
    report: ReportId,
    payload: &ReportPayload,
    packages: &[PackageRecord],
    flush: bool,
    count: u64,
) -> Result<ReportOutcome> {
    validate_report(payload)?;
    validate_packages(packages)?;
    check_roles(packages, config.allow_unpackaged)?;

    save_report(repo, ctx, config, report, payload, packages, flush, count)
}

/// Save an already-validated report.
pub fn save_report(
    repo: &mut dyn PackageRepository,
    ctx: &IngestContext,
    config: &SystemConfig,
    report: ReportId,
    payload: &ReportPayload,
    packages: &[PackageRecord],
    flush: bool,
    count: u64,
) -> Result<ReportOutcome> {
    let log_ctx = ctx.log_context(report);
    let mut desktop_recorded = false;

    if let Some(desktop) = &payload.desktop {
        match repo.release_by_version(&config.opsys_name, &payload.version) {
            Some(release) => {
                repo.release_desktop(report, release, desktop).count += count;
                desktop_recorded = true;
            }
            None => {
                log::warn!(
                    "{} RELEASE_UNKNOWN opsys={} version={}",
                    log_ctx,
                    config.opsys_name,
                    payload.version
                );
            }
        }
    }

    let stats = reconcile_packages(repo, report, packages, count, &log_ctx);

    if flush {
        repo.flush().map_err(IngestError::Storage)?;
    }

    log::info!(
        "{} REPORT_SAVED known={} unknown={} skipped={} desktop={}",
        log_ctx,
        stats.known,
        stats.unknown,
        stats.skipped,
        desktop_recorded
    );

    Ok(ReportOutcome {
        stats,
        desktop_recorded,
    })
}

/// Check whether any affected package's NVRA matches the given pattern.
///
/// Used to probe a report against known-crash signatures keyed by package
/// identity.
pub fn affected_matches(packages: &[PackageRecord], pattern: &Regex) -> bool {
    packages
        .iter()
        .filter(|p| {
            p.package_role
                .as_deref()
                .is_some_and(|role| role.eq_ignore_ascii_case("affected"))
        })
        .any(|p| pattern.is_match(&p.nvra()))
}
