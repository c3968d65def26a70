//! In-memory package repository.
//!
//! HashMap-backed reference implementation of [`PackageRepository`].
//! Backs the test suite and small single-process deployments; a database
//! implementation replaces it in production.

use std::collections::HashMap;

use crate::storage::models::{
    ArchId, DesktopUsageAggregate, Nevra, PackageId, PackageRole, ReleaseId, ReportId,
    ReportPackageAssociation, UnknownPackageAggregate,
};
use crate::storage::repository::PackageRepository;
use crate::storage::semver::to_sortable;

type UnknownKey = (ReportId, PackageRole, Nevra);
type DesktopKey = (ReportId, ReleaseId, String);

#[derive(Debug, Default)]
pub struct MemoryRepository {
    packages: HashMap<Nevra, PackageId>,
    architectures: HashMap<String, ArchId>,
    releases: HashMap<(String, String), ReleaseId>,
    next_id: i64,

    associations: HashMap<(ReportId, PackageId), ReportPackageAssociation>,
    unknown: HashMap<UnknownKey, UnknownPackageAggregate>,
    desktops: HashMap<DesktopKey, DesktopUsageAggregate>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Seed a catalog package, returning its id.
    pub fn add_package(&mut self, nevra: Nevra) -> PackageId {
        let id = PackageId(self.allocate_id());
        self.packages.insert(nevra, id);
        id
    }

    /// Seed a known architecture, returning its id.
    pub fn add_architecture(&mut self, name: &str) -> ArchId {
        let id = ArchId(self.allocate_id());
        self.architectures.insert(name.to_string(), id);
        id
    }

    /// Seed a release for (operating system name, version string).
    pub fn add_release(&mut self, opsys: &str, version: &str) -> ReleaseId {
        let id = ReleaseId(self.allocate_id());
        self.releases
            .insert((opsys.to_string(), version.to_string()), id);
        id
    }

    pub fn associations(&self) -> impl Iterator<Item = &ReportPackageAssociation> {
        self.associations.values()
    }

    pub fn unknown_packages(&self) -> impl Iterator<Item = &UnknownPackageAggregate> {
        self.unknown.values()
    }

    pub fn desktop_usage(&self) -> impl Iterator<Item = &DesktopUsageAggregate> {
        self.desktops.values()
    }
}

impl PackageRepository for MemoryRepository {
    fn package_by_nevra(&self, nevra: &Nevra) -> Option<PackageId> {
        self.packages.get(nevra).copied()
    }

    fn architecture_by_name(&self, name: &str) -> Option<ArchId> {
        self.architectures.get(name).copied()
    }

    fn release_by_version(&self, opsys: &str, version: &str) -> Option<ReleaseId> {
        self.releases
            .get(&(opsys.to_string(), version.to_string()))
            .copied()
    }

    fn report_package(
        &mut self,
        report: ReportId,
        package: PackageId,
        role: PackageRole,
    ) -> &mut ReportPackageAssociation {
        self.associations
            .entry((report, package))
            .or_insert_with(|| ReportPackageAssociation {
                report,
                package,
                role,
                count: 0,
            })
    }

    fn unknown_package(
        &mut self,
        report: ReportId,
        role: PackageRole,
        nevra: &Nevra,
        arch: ArchId,
    ) -> &mut UnknownPackageAggregate {
        self.unknown
            .entry((report, role, nevra.clone()))
            .or_insert_with(|| UnknownPackageAggregate {
                report,
                role,
                name: nevra.name.clone(),
                epoch: nevra.epoch,
                version: nevra.version.clone(),
                release: nevra.release.clone(),
                arch,
                semver: to_sortable(&nevra.version),
                semrel: to_sortable(&nevra.release),
                count: 0,
            })
    }

    fn release_desktop(
        &mut self,
        report: ReportId,
        release: ReleaseId,
        desktop: &str,
    ) -> &mut DesktopUsageAggregate {
        self.desktops
            .entry((report, release, desktop.to_string()))
            .or_insert_with(|| DesktopUsageAggregate {
                report,
                release,
                desktop: desktop.to_string(),
                count: 0,
            })
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        // Aggregates live in process memory, nothing to make durable.
        Ok(())
    }
}
