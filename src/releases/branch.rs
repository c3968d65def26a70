//! Release version to branch name mapping.
//!
//! The build/version-control system keys its branches by a naming
//! convention that changed over the distribution's history; this mapping
//! is the single place that convention lives.

use crate::error::{IngestError, Result};

/// Convert a release version to its branch name.
///
/// "rawhide" maps to itself regardless of case. Numeric versions follow
/// the historical convention: "FC-{n}" below 6, "fc6" at 6, "f{n}" above.
/// Anything else is an invalid release.
pub fn release_to_branch(release: &str) -> Result<String> {
    if release.eq_ignore_ascii_case("rawhide") {
        return Ok("rawhide".to_string());
    }

    if !release.is_empty() && release.bytes().all(|b| b.is_ascii_digit()) {
        let version: u64 = release
            .parse()
            .map_err(|_| IngestError::InvalidRelease(release.to_string()))?;
        let branch = if version < 6 {
            format!("FC-{}", version)
        } else if version == 6 {
            format!("fc{}", version)
        } else {
            format!("f{}", version)
        };
        return Ok(branch);
    }

    Err(IngestError::InvalidRelease(release.to_string()))
}
