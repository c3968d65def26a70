//! Ingestion configuration.
//!
//! All operator-tunable knobs are carried in an explicit, immutable
//! [`SystemConfig`] value handed to the entry points; nothing is read from
//! ambient process state.

use serde::{Deserialize, Serialize};

/// Configuration for one distribution's report intake.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Catalog name of the operating system, used for release lookups.
    pub opsys_name: String,
    /// Glob patterns for release versions whose reports are dropped.
    pub ignored_releases: Vec<String>,
    /// Accept reports that carry no package with the "affected" role.
    pub allow_unpackaged: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            opsys_name: "Fedora".to_string(),
            ignored_releases: Vec::new(),
            allow_unpackaged: false,
        }
    }
}

/// Split a flat configuration value into a list.
///
/// Accepts both comma- and whitespace-separated entries, which is how
/// operators write multi-valued options in .conf files.
pub fn words_to_list(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c.is_ascii_whitespace())
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
