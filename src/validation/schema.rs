//! Shape validation of incoming reports.
//!
//! Checks charset and length constraints on the package list and on
//! report-level metadata. All-or-nothing: the first offending field aborts
//! the whole report with a schema error, nothing is mutated.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{IngestError, Result};
use crate::storage::models::{column, PackageRecord, ReportPayload};

lazy_static! {
    static ref NAME_RE: Regex = Regex::new(r"^[a-zA-Z0-9_\-\.\+~]+$").unwrap();
    static ref VERSION_RE: Regex = Regex::new(r"^[a-zA-Z0-9_\.\+~]+$").unwrap();
    static ref RELEASE_RE: Regex = Regex::new(r"^[a-zA-Z0-9_\.\+]+$").unwrap();
    static ref ARCH_RE: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
    static ref DESKTOP_RE: Regex = Regex::new(r"^[a-zA-Z0-9_/-]+$").unwrap();
}

fn check_field(field: &str, value: &str, pattern: &Regex, max_len: usize) -> Result<()> {
    if value.is_empty() {
        return Err(IngestError::Schema {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if value.len() > max_len {
        return Err(IngestError::Schema {
            field: field.to_string(),
            reason: format!("exceeds maximum length of {}", max_len),
        });
    }
    if !pattern.is_match(value) {
        return Err(IngestError::Schema {
            field: field.to_string(),
            reason: format!("must match {}", pattern.as_str()),
        });
    }
    Ok(())
}

/// Validate every package record against the catalog's field constraints.
pub fn validate_packages(packages: &[PackageRecord]) -> Result<()> {
    for (idx, package) in packages.iter().enumerate() {
        check_field(
            &format!("packages[{}].name", idx),
            &package.name,
            &NAME_RE,
            column::PACKAGE_NAME,
        )?;
        if package.epoch < 0 {
            return Err(IngestError::Schema {
                field: format!("packages[{}].epoch", idx),
                reason: "must be a non-negative integer".to_string(),
            });
        }
        check_field(
            &format!("packages[{}].version", idx),
            &package.version,
            &VERSION_RE,
            column::BUILD_VERSION,
        )?;
        check_field(
            &format!("packages[{}].release", idx),
            &package.release,
            &RELEASE_RE,
            column::BUILD_RELEASE,
        )?;
        check_field(
            &format!("packages[{}].architecture", idx),
            &package.architecture,
            &ARCH_RE,
            column::ARCH_NAME,
        )?;
    }
    Ok(())
}

/// Validate report-level metadata, independent of the package list.
pub fn validate_report(payload: &ReportPayload) -> Result<()> {
    if let Some(desktop) = &payload.desktop {
        check_field("desktop", desktop, &DESKTOP_RE, column::DESKTOP)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, version: &str, release: &str, arch: &str) -> PackageRecord {
        PackageRecord {
            name: name.to_string(),
            epoch: 0,
            version: version.to_string(),
            release: release.to_string(),
            architecture: arch.to_string(),
            package_role: None,
        }
    }

    #[test]
    fn test_valid_package_list() {
        let packages = vec![
            record("glibc", "2.38", "1.fc20", "x86_64"),
            record("gtk3+extras", "3.24.1~rc1", "2.fc20", "i686"),
        ];
        assert!(validate_packages(&packages).is_ok());
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_packages(&[]).is_ok());
    }

    #[test]
    fn test_bad_name_charset() {
        let packages = vec![record("bad name", "1.0", "1.fc20", "x86_64")];
        let err = validate_packages(&packages).unwrap_err();
        assert!(matches!(err, IngestError::Schema { ref field, .. } if field == "packages[0].name"));
    }

    #[test]
    fn test_release_rejects_tilde() {
        // The release charset is narrower than version: no '~', no '-'.
        let packages = vec![record("foo", "1.0", "1~fc20", "x86_64")];
        assert!(validate_packages(&packages).is_err());
        let packages = vec![record("foo", "1.0~rc1", "1.fc20", "x86_64")];
        assert!(validate_packages(&packages).is_ok());
    }

    #[test]
    fn test_arch_rejects_punctuation() {
        let packages = vec![record("foo", "1.0", "1.fc20", "x86.64")];
        let err = validate_packages(&packages).unwrap_err();
        assert!(
            matches!(err, IngestError::Schema { ref field, .. } if field == "packages[0].architecture")
        );
    }

    #[test]
    fn test_negative_epoch() {
        let mut bad = record("foo", "1.0", "1.fc20", "x86_64");
        bad.epoch = -1;
        let err = validate_packages(&[bad]).unwrap_err();
        assert!(matches!(err, IngestError::Schema { ref field, .. } if field == "packages[0].epoch"));
    }

    #[test]
    fn test_second_record_reported_with_index() {
        let packages = vec![
            record("foo", "1.0", "1.fc20", "x86_64"),
            record("", "1.0", "1.fc20", "x86_64"),
        ];
        let err = validate_packages(&packages).unwrap_err();
        assert!(matches!(err, IngestError::Schema { ref field, .. } if field == "packages[1].name"));
    }

    #[test]
    fn test_name_length_bound() {
        let packages = vec![record(&"a".repeat(column::PACKAGE_NAME + 1), "1.0", "1", "noarch")];
        assert!(validate_packages(&packages).is_err());
        let packages = vec![record(&"a".repeat(column::PACKAGE_NAME), "1.0", "1", "noarch")];
        assert!(validate_packages(&packages).is_ok());
    }

    #[test]
    fn test_desktop_field() {
        let ok = ReportPayload {
            version: "20".to_string(),
            desktop: Some("GNOME/Shell".to_string()),
        };
        assert!(validate_report(&ok).is_ok());

        let bad = ReportPayload {
            version: "20".to_string(),
            desktop: Some("GNOME Shell".to_string()),
        };
        assert!(validate_report(&bad).is_err());

        let absent = ReportPayload {
            version: "20".to_string(),
            desktop: None,
        };
        assert!(validate_report(&absent).is_ok());
    }
}
