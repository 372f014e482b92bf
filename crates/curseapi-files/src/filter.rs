//! Composable predicates for narrowing a [`FileCollection`].
//!
//! Builder methods take `&mut self` and return `&mut Self`, so a chain of
//! calls configures one filter in place. [`Clone::clone`] is the only way to
//! obtain an independent copy:
//!
//! ```
//! use curseapi_core::types::FileId;
//! use curseapi_entity::ReleaseType;
//! use curseapi_files::FileFilter;
//!
//! let mut base = FileFilter::new();
//! base.minimum_stability(ReleaseType::Beta);
//!
//! let mut narrowed = base.clone();
//! narrowed.older_than(FileId::new(2581245));
//!
//! assert_ne!(base, narrowed);
//! ```

use std::collections::BTreeSet;
use std::ops::Bound;

use serde::{Deserialize, Serialize};

use curseapi_core::types::FileId;
use curseapi_entity::{File, ReleaseType, VersionGroup};

use crate::collection::FileCollection;

/// A set of ANDed predicates over [`File`]s. Unset predicates accept everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilter {
    /// Least stable release type to keep.
    minimum_stability: Option<ReleaseType>,
    /// Lower id bound.
    lower: Bound<FileId>,
    /// Upper id bound.
    upper: Bound<FileId>,
    /// Keep files with a version in any of these groups.
    version_groups: BTreeSet<VersionGroup>,
    /// Keep files carrying any of these version strings.
    versions: BTreeSet<String>,
    /// When set, keep only these ids.
    include_ids: Option<BTreeSet<FileId>>,
    /// Drop these ids.
    exclude_ids: BTreeSet<FileId>,
}

impl FileFilter {
    /// Create a filter that accepts every file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep files at least as stable as `minimum`.
    pub fn minimum_stability(&mut self, minimum: ReleaseType) -> &mut Self {
        self.minimum_stability = Some(minimum);
        self
    }

    /// Keep files with a game version in any of `groups`. Replaces previously set groups.
    pub fn game_version_groups<I>(&mut self, groups: I) -> &mut Self
    where
        I: IntoIterator<Item = VersionGroup>,
    {
        self.version_groups = groups.into_iter().collect();
        self
    }

    /// Slice form of [`FileFilter::game_version_groups`].
    pub fn game_version_groups_array(&mut self, groups: &[VersionGroup]) -> &mut Self {
        self.game_version_groups(groups.iter().cloned())
    }

    /// Add one group to the accepted version groups.
    pub fn game_version_group(&mut self, group: VersionGroup) -> &mut Self {
        self.version_groups.insert(group);
        self
    }

    /// Keep files carrying any of `versions`. Replaces previously set versions.
    pub fn game_versions<I, S>(&mut self, versions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.versions = versions.into_iter().map(Into::into).collect();
        self
    }

    /// Keep files with `lower <= id < upper`.
    pub fn between(&mut self, lower: impl Into<FileId>, upper: impl Into<FileId>) -> &mut Self {
        self.lower = Bound::Included(lower.into());
        self.upper = Bound::Excluded(upper.into());
        self
    }

    /// Keep files with an id strictly below `id`.
    pub fn older_than(&mut self, id: impl Into<FileId>) -> &mut Self {
        self.upper = Bound::Excluded(id.into());
        self
    }

    /// Keep files with an id strictly above `id`.
    pub fn newer_than(&mut self, id: impl Into<FileId>) -> &mut Self {
        self.lower = Bound::Excluded(id.into());
        self
    }

    /// Set the lower id bound explicitly.
    pub fn lower_bound(&mut self, bound: Bound<FileId>) -> &mut Self {
        self.lower = bound;
        self
    }

    /// Set the upper id bound explicitly.
    pub fn upper_bound(&mut self, bound: Bound<FileId>) -> &mut Self {
        self.upper = bound;
        self
    }

    /// Keep only files whose id is in `ids`. Replaces a previous include set.
    pub fn include_ids<I>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = FileId>,
    {
        self.include_ids = Some(ids.into_iter().collect());
        self
    }

    /// Drop files whose id is in `ids`. Adds to the existing exclude set.
    pub fn exclude_ids<I>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = FileId>,
    {
        self.exclude_ids.extend(ids);
        self
    }

    /// Whether no predicate is configured.
    pub fn is_unrestricted(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `file` passes every configured predicate.
    pub fn accepts(&self, file: &File) -> bool {
        self.accepts_stability(file)
            && self.accepts_range(file)
            && self.accepts_version_groups(file)
            && self.accepts_versions(file)
            && self.accepts_ids(file)
    }

    /// Remove every file this filter rejects from `files`.
    ///
    /// Equivalent to [`FileCollection::filter`]. Returns whether anything was removed.
    pub fn apply(&self, files: &mut FileCollection) -> bool {
        files.filter(self)
    }

    fn accepts_stability(&self, file: &File) -> bool {
        self.minimum_stability
            .is_none_or(|minimum| file.release_type.matches_minimum_stability(minimum))
    }

    fn accepts_range(&self, file: &File) -> bool {
        let above = match self.lower {
            Bound::Included(lower) => file.id >= lower,
            Bound::Excluded(lower) => file.id > lower,
            Bound::Unbounded => true,
        };
        let below = match self.upper {
            Bound::Included(upper) => file.id <= upper,
            Bound::Excluded(upper) => file.id < upper,
            Bound::Unbounded => true,
        };
        above && below
    }

    fn accepts_version_groups(&self, file: &File) -> bool {
        self.version_groups.is_empty()
            || self
                .version_groups
                .iter()
                .any(|group| group.contains_any(&file.game_versions))
    }

    fn accepts_versions(&self, file: &File) -> bool {
        self.versions.is_empty() || !self.versions.is_disjoint(&file.game_versions)
    }

    fn accepts_ids(&self, file: &File) -> bool {
        let included = self
            .include_ids
            .as_ref()
            .is_none_or(|ids| ids.contains(&file.id));
        included && !self.exclude_ids.contains(&file.id)
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self {
            minimum_stability: None,
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
            version_groups: BTreeSet::new(),
            versions: BTreeSet::new(),
            include_ids: None,
            exclude_ids: BTreeSet::new(),
        }
    }
}
