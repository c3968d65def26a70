//! Storage module.
//!
//! Catalog/aggregate models, the repository abstraction the reconciler
//! writes through, and an in-memory reference implementation.

pub mod memory;
pub mod models;
pub mod repository;
pub mod semver;

pub use memory::*;
pub use models::*;
pub use repository::*;
pub use semver::*;
