//! Build feed merging.
//!
//! A release's builds live under two tags: the base tag frozen at release
//! time and the updates tag. Both are queried and combined into a single
//! feed, normalized and ordered newest first. A build tagged under both
//! sources appears twice in the feed; no deduplication is performed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Completion-time wire format used by the build system.
pub const COMPLETION_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// One build as returned by a tag query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBuild {
    pub name: String,
    #[serde(default)]
    pub epoch: Option<i64>,
    pub version: String,
    pub release: String,
    pub nvr: String,
    pub completion_time: String,
}

/// Normalized build record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRecord {
    pub name: String,
    pub epoch: i64,
    pub version: String,
    pub release: String,
    pub nvr: String,
    pub completion_time: NaiveDateTime,
}

/// External build-tag query service.
pub trait BuildTagSource {
    fn tagged_builds(&self, tag: &str) -> anyhow::Result<Vec<RawBuild>>;
}

fn normalize(raw: RawBuild) -> Result<BuildRecord> {
    let completion_time = NaiveDateTime::parse_from_str(&raw.completion_time, COMPLETION_TIME_FORMAT)
        .map_err(|source| IngestError::Timestamp {
            value: raw.completion_time.clone(),
            source,
        })?;

    Ok(BuildRecord {
        name: raw.name,
        epoch: raw.epoch.unwrap_or(0),
        version: raw.version,
        release: raw.release,
        nvr: raw.nvr,
        completion_time,
    })
}

/// Combine two tag queries into one chronological feed, newest first.
///
/// The sort is stable, so builds completing at the same instant keep
/// their input order (base tag entries before updates entries).
pub fn merge_tagged_builds(base: Vec<RawBuild>, updates: Vec<RawBuild>) -> Result<Vec<BuildRecord>> {
    let mut records = Vec::with_capacity(base.len() + updates.len());
    for raw in base.into_iter().chain(updates) {
        records.push(normalize(raw)?);
    }

    records.sort_by(|a, b| b.completion_time.cmp(&a.completion_time));
    Ok(records)
}

/// Query the base and updates tags of a release and merge the results.
pub fn released_builds(source: &dyn BuildTagSource, release: &str) -> Result<Vec<BuildRecord>> {
    let base = source
        .tagged_builds(&format!("f{}", release))
        .map_err(IngestError::Directory)?;
    let updates = source
        .tagged_builds(&format!("f{}-updates", release))
        .map_err(IngestError::Directory)?;

    merge_tagged_builds(base, updates)
}
