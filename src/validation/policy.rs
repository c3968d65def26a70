//! Role policy checks.
//!
//! Runs after structural validation. Role tags outside the fixed set are
//! rejected outright, and a report must name at least one affected package
//! unless the configuration allows unpackaged reports.

use crate::error::{IngestError, Result};
use crate::storage::models::PackageRecord;

/// Role tags a report may carry.
pub const PACKAGE_ROLES: [&str; 3] = ["affected", "related", "selinux_policy"];

/// Enforce the role policy over a validated package list.
pub fn check_roles(packages: &[PackageRecord], allow_unpackaged: bool) -> Result<()> {
    let mut affected = false;

    for package in packages {
        if let Some(role) = &package.package_role {
            if !PACKAGE_ROLES.contains(&role.as_str()) {
                return Err(IngestError::Policy(format!(
                    "only the following package roles are allowed: {}",
                    PACKAGE_ROLES.join(", ")
                )));
            }
            if role == "affected" {
                affected = true;
            }
        }
    }

    if !(affected || allow_unpackaged) {
        return Err(IngestError::Policy(
            "report must contain a package with the affected role".to_string(),
        ));
    }

    Ok(())
}
