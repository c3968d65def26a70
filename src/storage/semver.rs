//! Sortable numeric forms of version and release strings.
//!
//! Unknown-package aggregates store these alongside the raw strings so
//! later ordering happens on a uniform dotted-numeric representation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").unwrap();
}

/// Reduce a version-like string to its digit runs joined by dots.
///
/// Leading zeros are dropped from each run so lexicographic segment
/// comparison agrees with numeric comparison. A string with no digits
/// reduces to "0".
pub fn to_sortable(value: &str) -> String {
    let parts: Vec<String> = DIGIT_RUN
        .find_iter(value)
        .map(|m| {
            let trimmed = m.as_str().trim_start_matches('0');
            if trimmed.is_empty() {
                "0".to_string()
            } else {
                trimmed.to_string()
            }
        })
        .collect();

    if parts.is_empty() {
        "0".to_string()
    } else {
        parts.join(".")
    }
}
