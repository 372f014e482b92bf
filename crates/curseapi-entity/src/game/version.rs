//! Game version groups.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A named set of game version strings treated as equivalent when filtering.
///
/// Each version string belongs to exactly one group, e.g. `"1.12"`,
/// `"1.12.1"` and `"1.12.2"` all belong to the `"1.12"` group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionGroup {
    /// Group name.
    pub name: String,
    /// Version strings in the group.
    pub versions: BTreeSet<String>,
}

impl VersionGroup {
    /// Create a group from its name and member versions.
    pub fn new<I, S>(name: impl Into<String>, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            versions: versions.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the given version string belongs to this group.
    pub fn contains(&self, version: &str) -> bool {
        self.versions.contains(version)
    }

    /// Whether any of the given version strings belongs to this group.
    pub fn contains_any<'a>(&self, versions: impl IntoIterator<Item = &'a String>) -> bool {
        versions.into_iter().any(|version| self.contains(version))
    }
}
