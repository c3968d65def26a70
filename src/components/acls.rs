//! Component enumeration and ownership.
//!
//! Components are looked up by branch name, so callers hand in a release
//! version and the branch mapping happens here. Ownership merges two
//! directory queries: owners grant commit, watchers grant watch, keyed by
//! username.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};
use crate::releases::branch::release_to_branch;

/// Per-user capabilities on a component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentAcl {
    pub commit: bool,
    pub watch: bool,
}

/// External component-metadata service.
pub trait ComponentDirectory {
    /// Component names carried on a branch.
    fn branch_components(&self, branch: &str) -> anyhow::Result<Vec<String>>;

    /// Usernames with commit access to a component.
    fn component_owners(&self, component: &str) -> anyhow::Result<Vec<String>>;

    /// Usernames watching a component.
    fn component_watchers(&self, component: &str) -> anyhow::Result<Vec<String>>;
}

/// List the components of a release's branch.
pub fn release_components(
    directory: &dyn ComponentDirectory,
    release: &str,
) -> Result<Vec<String>> {
    let branch = release_to_branch(release)?;
    directory
        .branch_components(&branch)
        .map_err(IngestError::Directory)
}

/// Merge owner and watcher queries into per-user ACLs.
///
/// A failed sub-query is logged and whatever was gathered so far is
/// returned, so one unreachable endpoint does not discard the other's
/// answer.
pub fn component_acls(
    directory: &dyn ComponentDirectory,
    component: &str,
) -> HashMap<String, ComponentAcl> {
    let mut result = HashMap::new();

    let owners = match directory.component_owners(component) {
        Ok(owners) => owners,
        Err(e) => {
            log::error!("ACL_OWNERS_FAILED component={} error={}", component, e);
            return result;
        }
    };
    for user in owners {
        result.insert(
            user,
            ComponentAcl {
                commit: true,
                watch: false,
            },
        );
    }

    let watchers = match directory.component_watchers(component) {
        Ok(watchers) => watchers,
        Err(e) => {
            log::error!("ACL_WATCHERS_FAILED component={} error={}", component, e);
            return result;
        }
    };
    for user in watchers {
        result
            .entry(user)
            .and_modify(|acl| acl.watch = true)
            .or_insert(ComponentAcl {
                commit: false,
                watch: true,
            });
    }

    result
}
