//! Build feed module.
//!
//! Two-tag build queries merged into one time-ordered feed.

pub mod merge;

pub use merge::*;
