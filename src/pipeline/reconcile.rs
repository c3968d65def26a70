//! Package reconciliation.
//!
//! Matches each package of a validated report against the catalog and
//! applies the caller's increment to the right aggregate:
//! - catalog hit: the (report, package) association
//! - catalog miss: the unknown-package aggregate, keyed with the role
//! - unresolvable architecture: skipped, the occurrence is dropped
//!
//! A missing package is the common branch here, never an error. Records
//! are processed in list order so runs are deterministic.

use crate::logging::structured::LogContext;
use crate::storage::models::{PackageRecord, ReportId};
use crate::storage::repository::PackageRepository;

/// Per-report reconciliation tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub known: usize,
    pub unknown: usize,
    pub skipped: usize,
}

/// Reconcile every record exactly once, incrementing by `amount`.
pub fn reconcile_packages(
    repo: &mut dyn PackageRepository,
    report: ReportId,
    packages: &[PackageRecord],
    amount: u64,
    ctx: &LogContext,
) -> ReconcileStats {
    let mut stats = ReconcileStats::default();

    for package in packages {
        let role = package.role();
        let nevra = package.nevra();

        if let Some(db_package) = repo.package_by_nevra(&nevra) {
            repo.report_package(report, db_package, role).count += amount;
            stats.known += 1;
            continue;
        }

        log::warn!("{} PACKAGE_UNKNOWN nevra={}", ctx, nevra);

        match repo.architecture_by_name(&package.architecture) {
            Some(arch) => {
                repo.unknown_package(report, role, &nevra, arch).count += amount;
                stats.unknown += 1;
            }
            None => {
                // Unresolvable architecture: drop the occurrence.
                stats.skipped += 1;
            }
        }
    }

    log::debug!(
        "{} PACKAGES_RECONCILED known={} unknown={} skipped={}",
        ctx,
        stats.known,
        stats.unknown,
        stats.skipped
    );

    stats
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::storage::memory::MemoryRepository;
    use crate::storage::models::{Nevra, PackageRole};

    fn ctx() -> LogContext {
        LogContext::new("test-ingest")
    }

    fn record(name: &str, role: Option<&str>) -> PackageRecord {
        PackageRecord {
            name: name.to_string(),
            epoch: 0,
            version: "1.0".to_string(),
            release: "1.fc20".to_string(),
            architecture: "x86_64".to_string(),
            package_role: role.map(str::to_string),
        }
    }

    fn seeded_repo() -> MemoryRepository {
        let mut repo = MemoryRepository::new();
        repo.add_architecture("x86_64");
        repo.add_package(record("known-pkg", None).nevra());
        repo
    }

    #[test]
    fn test_known_unknown_partition() {
        let mut repo = seeded_repo();
        let packages = vec![
            record("known-pkg", Some("affected")),
            record("missing-pkg", Some("related")),
        ];

        let stats = reconcile_packages(&mut repo, ReportId(1), &packages, 1, &ctx());
        assert_eq!(stats, ReconcileStats { known: 1, unknown: 1, skipped: 0 });

        assert_eq!(repo.associations().count(), 1);
        assert_eq!(repo.unknown_packages().count(), 1);

        let assoc = repo.associations().next().unwrap();
        assert_eq!(assoc.role, PackageRole::Crashed);
        assert_eq!(assoc.count, 1);

        let agg = repo.unknown_packages().next().unwrap();
        assert_eq!(agg.name, "missing-pkg");
        assert_eq!(agg.role, PackageRole::Related);
    }

    #[test]
    fn test_architecture_miss_is_skipped() {
        let mut repo = seeded_repo();
        let mut alien = record("missing-pkg", Some("affected"));
        alien.architecture = "sparc64".to_string();

        let stats = reconcile_packages(&mut repo, ReportId(1), &[alien], 1, &ctx());
        assert_eq!(stats, ReconcileStats { known: 0, unknown: 0, skipped: 1 });
        assert_eq!(repo.associations().count(), 0);
        assert_eq!(repo.unknown_packages().count(), 0);
    }

    #[test]
    fn test_repeat_occurrences_accumulate() {
        let mut repo = seeded_repo();
        let packages = vec![record("known-pkg", Some("affected"))];

        for _ in 0..3 {
            reconcile_packages(&mut repo, ReportId(1), &packages, 1, &ctx());
        }

        assert_eq!(repo.associations().next().unwrap().count, 3);
    }

    #[test]
    fn test_duplicate_records_in_one_report() {
        let mut repo = seeded_repo();
        let packages = vec![
            record("known-pkg", Some("affected")),
            record("known-pkg", Some("affected")),
        ];

        let stats = reconcile_packages(&mut repo, ReportId(1), &packages, 1, &ctx());
        assert_eq!(stats.known, 2);
        assert_eq!(repo.associations().count(), 1);
        assert_eq!(repo.associations().next().unwrap().count, 2);
    }

    #[test]
    fn test_unknown_aggregate_key_includes_role() {
        let mut repo = seeded_repo();
        let packages = vec![
            record("missing-pkg", Some("affected")),
            record("missing-pkg", Some("related")),
        ];

        reconcile_packages(&mut repo, ReportId(1), &packages, 1, &ctx());
        assert_eq!(repo.unknown_packages().count(), 2);
    }

    #[test]
    fn test_separate_reports_do_not_share_aggregates() {
        let mut repo = seeded_repo();
        let packages = vec![record("known-pkg", Some("affected"))];

        reconcile_packages(&mut repo, ReportId(1), &packages, 1, &ctx());
        reconcile_packages(&mut repo, ReportId(2), &packages, 1, &ctx());

        assert_eq!(repo.associations().count(), 2);
        assert!(repo.associations().all(|a| a.count == 1));
    }

    proptest! {
        #[test]
        fn prop_count_scales_with_amount(reps in 1usize..20, amount in 1u64..10) {
            let mut repo = seeded_repo();
            let packages = vec![record("known-pkg", Some("affected"))];

            for _ in 0..reps {
                reconcile_packages(&mut repo, ReportId(1), &packages, amount, &ctx());
            }

            let nevra = Nevra {
                name: "known-pkg".to_string(),
                epoch: 0,
                version: "1.0".to_string(),
                release: "1.fc20".to_string(),
                arch: "x86_64".to_string(),
            };
            let pkg = repo.package_by_nevra(&nevra).unwrap();
            let assoc = repo.report_package(ReportId(1), pkg, PackageRole::Crashed);
            prop_assert_eq!(assoc.count, amount * reps as u64);
        }
    }
}
