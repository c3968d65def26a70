//! Package repository abstraction.
//!
//! The reconciler talks to the catalog and its aggregates exclusively
//! through this trait. Lookups return `None` on a miss, which is an
//! expected branch, not an error. The find-or-create accessors hand back a
//! mutable aggregate created with count 0 on first use; callers apply their
//! own delta.
//!
//! Concurrency is the implementor's concern: two ingests racing on the
//! same aggregate row must be resolved with an atomic upsert or row-level
//! locking behind these methods. The core only performs read-modify-write
//! with the delta it was given.

use crate::storage::models::{
    ArchId, DesktopUsageAggregate, Nevra, PackageId, PackageRole, ReleaseId, ReportId,
    ReportPackageAssociation, UnknownPackageAggregate,
};

pub trait PackageRepository {
    /// Exact-match catalog lookup by (name, epoch, version, release, arch).
    fn package_by_nevra(&self, nevra: &Nevra) -> Option<PackageId>;

    /// Resolve an architecture name against the catalog's known set.
    fn architecture_by_name(&self, name: &str) -> Option<ArchId>;

    /// Resolve a release by (operating system name, version string).
    fn release_by_version(&self, opsys: &str, version: &str) -> Option<ReleaseId>;

    /// Find or create the association for (report, package). The role is
    /// fixed at creation and not updated on later occurrences.
    fn report_package(
        &mut self,
        report: ReportId,
        package: PackageId,
        role: PackageRole,
    ) -> &mut ReportPackageAssociation;

    /// Find or create the unknown-package aggregate keyed by
    /// (report, role, name, epoch, version, release, arch).
    fn unknown_package(
        &mut self,
        report: ReportId,
        role: PackageRole,
        nevra: &Nevra,
        arch: ArchId,
    ) -> &mut UnknownPackageAggregate;

    /// Find or create the desktop usage aggregate for
    /// (report, release, desktop).
    fn release_desktop(
        &mut self,
        report: ReportId,
        release: ReleaseId,
        desktop: &str,
    ) -> &mut DesktopUsageAggregate;

    /// Make pending aggregate mutations durable. Callers batch many
    /// reports into one flush for throughput, or flush per-report for
    /// isolation.
    fn flush(&mut self) -> anyhow::Result<()>;
}
