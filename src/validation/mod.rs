//! Report validation module.
//!
//! Two independent passes gate reconciliation:
//! - schema: charset/length constraints on package and report fields
//! - policy: role-tag restrictions and the affected-package requirement

pub mod policy;
pub mod schema;

pub use policy::*;
pub use schema::*;
