//! Release directory consumption.
//!
//! The release directory is an external metadata service listing every
//! release ever cut, including updates and updates-testing pseudo-releases.
//! Only GA entries with a decimal or "rawhide" version survive, minus the
//! operator's ignore list, each tagged ACTIVE or EOL.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};
use crate::releases::ignore::ReleaseFilter;

/// One release entry as returned by the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseDescriptor {
    pub version: String,
    #[serde(default)]
    pub release_type: String,
    #[serde(default)]
    pub active: bool,
}

/// Support status derived from the directory's `active` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseStatus {
    Active,
    Eol,
}

impl ReleaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseStatus::Active => "ACTIVE",
            ReleaseStatus::Eol => "EOL",
        }
    }
}

/// External release-metadata service.
pub trait ReleaseDirectory {
    fn list_releases(&self) -> anyhow::Result<Vec<ReleaseDescriptor>>;
}

/// Query the directory and keep the consumable releases.
pub fn collect_releases(
    directory: &dyn ReleaseDirectory,
    filter: &ReleaseFilter,
) -> Result<HashMap<String, ReleaseStatus>> {
    let releases = directory.list_releases().map_err(IngestError::Directory)?;

    let mut result = HashMap::new();
    for release in releases {
        let version = release.version.to_lowercase();

        // Only decimal versions and rawhide name real releases.
        let decimal = !version.is_empty() && version.bytes().all(|b| b.is_ascii_digit());
        if !decimal && version != "rawhide" {
            continue;
        }

        // Skip updates/updates-testing pseudo-releases and ignored versions.
        if release.release_type != "ga" || filter.is_ignored(&version) {
            continue;
        }

        let status = if release.active {
            ReleaseStatus::Active
        } else {
            ReleaseStatus::Eol
        };
        result.insert(version, status);
    }

    Ok(result)
}
