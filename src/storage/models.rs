//! Catalog and aggregate models.
//!
//! These mirror the rows the reconciler reads and writes through the
//! repository. Column width constants bound the validator's length checks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column widths of the backing catalog tables.
pub mod column {
    pub const PACKAGE_NAME: usize = 64;
    pub const BUILD_VERSION: usize = 64;
    pub const BUILD_RELEASE: usize = 64;
    pub const ARCH_NAME: usize = 8;
    pub const DESKTOP: usize = 256;
}

/// One entry in an incoming report's package list, as received on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub epoch: i64,
    pub version: String,
    pub release: String,
    pub architecture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_role: Option<String>,
}

impl PackageRecord {
    /// Role classification, a pure function of the role tag alone.
    pub fn role(&self) -> PackageRole {
        PackageRole::classify(self.package_role.as_deref())
    }

    pub fn nevra(&self) -> Nevra {
        Nevra {
            name: self.name.clone(),
            epoch: self.epoch,
            version: self.version.clone(),
            release: self.release.clone(),
            arch: self.architecture.clone(),
        }
    }

    /// Name-version-release.arch identity, without the epoch.
    pub fn nvra(&self) -> String {
        format!(
            "{}-{}-{}.{}",
            self.name, self.version, self.release, self.architecture
        )
    }
}

/// Report-level metadata accompanying the package list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPayload {
    /// Release version string of the reporting system, e.g. "20".
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<String>,
}

/// How a package relates to the crash being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageRole {
    Crashed,
    SelinuxPolicy,
    Related,
}

impl PackageRole {
    /// Classify a wire role tag. Unknown tags never reach this point, the
    /// policy check rejects them before reconciliation runs.
    pub fn classify(tag: Option<&str>) -> Self {
        match tag {
            Some("affected") => PackageRole::Crashed,
            Some("selinux_policy") => PackageRole::SelinuxPolicy,
            _ => PackageRole::Related,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageRole::Crashed => "CRASHED",
            PackageRole::SelinuxPolicy => "SELINUX_POLICY",
            PackageRole::Related => "RELATED",
        }
    }
}

/// Full compound identity of a package build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nevra {
    pub name: String,
    pub epoch: i64,
    pub version: String,
    pub release: String,
    pub arch: String,
}

impl fmt::Display for Nevra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}:{}-{}.{}",
            self.name, self.epoch, self.version, self.release, self.arch
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub i64);

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArchId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseId(pub i64);

/// Links a report to a catalog package with a role and occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPackageAssociation {
    pub report: ReportId,
    pub package: PackageId,
    pub role: PackageRole,
    pub count: u64,
}

/// Aggregated occurrences of a package the catalog does not know.
///
/// `semver` and `semrel` hold sortable numeric forms of version and release
/// so downstream queries can order unknown packages without re-parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnknownPackageAggregate {
    pub report: ReportId,
    pub role: PackageRole,
    pub name: String,
    pub epoch: i64,
    pub version: String,
    pub release: String,
    pub arch: ArchId,
    pub semver: String,
    pub semrel: String,
    pub count: u64,
}

/// Desktop environment usage tied to a report/release pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesktopUsageAggregate {
    pub report: ReportId,
    pub release: ReleaseId,
    pub desktop: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_classification() {
        assert_eq!(PackageRole::classify(Some("affected")), PackageRole::Crashed);
        assert_eq!(
            PackageRole::classify(Some("selinux_policy")),
            PackageRole::SelinuxPolicy
        );
        assert_eq!(PackageRole::classify(Some("related")), PackageRole::Related);
        assert_eq!(PackageRole::classify(None), PackageRole::Related);
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(PackageRole::Crashed.as_str(), "CRASHED");
        assert_eq!(PackageRole::SelinuxPolicy.as_str(), "SELINUX_POLICY");
        assert_eq!(PackageRole::Related.as_str(), "RELATED");
    }

    #[test]
    fn test_nevra_display() {
        let nevra = Nevra {
            name: "foo".to_string(),
            epoch: 0,
            version: "1.0".to_string(),
            release: "1.fc20".to_string(),
            arch: "x86_64".to_string(),
        };
        assert_eq!(format!("{}", nevra), "foo-0:1.0-1.fc20.x86_64");
    }

    #[test]
    fn test_package_record_nvra() {
        let record = PackageRecord {
            name: "foo".to_string(),
            epoch: 2,
            version: "1.0".to_string(),
            release: "1.fc20".to_string(),
            architecture: "x86_64".to_string(),
            package_role: Some("affected".to_string()),
        };
        assert_eq!(record.nvra(), "foo-1.0-1.fc20.x86_64");
    }

    #[test]
    fn test_package_record_deserializes_without_role() {
        let record: PackageRecord = serde_json::from_str(
            r#"{"name": "bar", "epoch": 0, "version": "2.1", "release": "3.fc21", "architecture": "i686"}"#,
        )
        .unwrap();
        assert!(record.package_role.is_none());
        assert_eq!(record.role(), PackageRole::Related);
    }
}
