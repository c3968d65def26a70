//! Release handling module.
//!
//! - branch: release version to branch name mapping
//! - ignore: operator-configured glob filtering of release versions
//! - directory: consumption of the external release-metadata service

pub mod branch;
pub mod directory;
pub mod ignore;

pub use branch::*;
pub use directory::*;
pub use ignore::*;
