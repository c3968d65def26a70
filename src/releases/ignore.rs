//! Release ignore filtering.
//!
//! Operators list shell-style glob patterns (`*`, `?`, character classes)
//! for release versions whose reports should be dropped. Matching is
//! case-sensitive; the first matching pattern wins.

use globset::{GlobBuilder, GlobMatcher};

/// Compiled ignore patterns.
#[derive(Debug, Default)]
pub struct ReleaseFilter {
    matchers: Vec<GlobMatcher>,
}

impl ReleaseFilter {
    /// Compile a pattern list. Patterns that fail to compile are logged
    /// and skipped rather than taking the whole filter down.
    pub fn new(patterns: &[String]) -> Self {
        let mut matchers = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            match GlobBuilder::new(pattern).build() {
                Ok(glob) => matchers.push(glob.compile_matcher()),
                Err(e) => {
                    log::warn!("IGNORE_PATTERN_INVALID pattern={} error={}", pattern, e);
                }
            }
        }
        Self { matchers }
    }

    pub fn is_ignored(&self, version: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(version))
    }
}

/// One-shot predicate over an uncompiled pattern list.
pub fn is_ignored(version: &str, patterns: &[String]) -> bool {
    ReleaseFilter::new(patterns).is_ignored(version)
}
