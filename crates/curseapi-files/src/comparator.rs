//! Orderings for file collections.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use curseapi_core::types::SortDirection;
use curseapi_entity::File;

/// Signature of a user-supplied ordering.
pub type CompareFn = dyn Fn(&File, &File) -> Ordering + Send + Sync;

/// The ordering a [`FileCollection`](crate::FileCollection) keeps its elements in.
///
/// Every comparator falls back to ascending id on ties, so the resulting
/// order is total and deterministic even for custom orderings.
#[derive(Clone)]
pub enum FileComparator {
    /// By file id, i.e. upload order.
    Id(SortDirection),
    /// By upload timestamp.
    UploadTime(SortDirection),
    /// By display name.
    DisplayName(SortDirection),
    /// A caller-supplied ordering.
    Custom(Arc<CompareFn>),
}

impl FileComparator {
    /// Oldest file first (ascending id). This is the default ordering.
    pub const SORT_BY_OLDEST: FileComparator = FileComparator::Id(SortDirection::Asc);

    /// Newest file first (descending id).
    pub const SORT_BY_NEWEST: FileComparator = FileComparator::Id(SortDirection::Desc);

    /// Earliest upload time first.
    pub fn by_upload_time() -> Self {
        Self::UploadTime(SortDirection::Asc)
    }

    /// Display name, alphabetically.
    pub fn by_name() -> Self {
        Self::DisplayName(SortDirection::Asc)
    }

    /// Wrap a closure as a comparator.
    pub fn custom<F>(compare: F) -> Self
    where
        F: Fn(&File, &File) -> Ordering + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(compare))
    }

    /// The same ordering, reversed. Ties still fall back to ascending id.
    pub fn reversed(&self) -> Self {
        match self {
            Self::Id(direction) => Self::Id(direction.reversed()),
            Self::UploadTime(direction) => Self::UploadTime(direction.reversed()),
            Self::DisplayName(direction) => Self::DisplayName(direction.reversed()),
            Self::Custom(compare) => {
                let compare = Arc::clone(compare);
                Self::custom(move |a, b| compare(b, a))
            }
        }
    }

    /// Compare two files.
    pub fn compare(&self, a: &File, b: &File) -> Ordering {
        let primary = match self {
            Self::Id(direction) => direction.apply(a.id.cmp(&b.id)),
            Self::UploadTime(direction) => direction.apply(a.upload_time.cmp(&b.upload_time)),
            Self::DisplayName(direction) => direction.apply(a.display_name.cmp(&b.display_name)),
            Self::Custom(compare) => compare(a, b),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

impl Default for FileComparator {
    fn default() -> Self {
        Self::SORT_BY_OLDEST
    }
}

impl fmt::Debug for FileComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(direction) => write!(f, "Id({})", direction.as_str()),
            Self::UploadTime(direction) => write!(f, "UploadTime({})", direction.as_str()),
            Self::DisplayName(direction) => write!(f, "DisplayName({})", direction.as_str()),
            Self::Custom(_) => write!(f, "Custom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use curseapi_core::types::{FileId, ProjectId};

    fn file(id: u32, name: &str, day: u32) -> File {
        File::new(ProjectId::new(1), FileId::new(id))
            .with_display_name(name)
            .with_upload_time(Utc.with_ymd_and_hms(2019, 1, day, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_predefined_orderings() {
        let old = file(1, "b", 1);
        let new = file(2, "a", 2);
        assert_eq!(
            FileComparator::SORT_BY_OLDEST.compare(&old, &new),
            Ordering::Less
        );
        assert_eq!(
            FileComparator::SORT_BY_NEWEST.compare(&old, &new),
            Ordering::Greater
        );
        assert_eq!(FileComparator::by_name().compare(&old, &new), Ordering::Greater);
    }

    #[test]
    fn test_ties_fall_back_to_id() {
        let a = file(10, "same", 1);
        let b = file(20, "same", 1);
        assert_eq!(FileComparator::by_name().compare(&a, &b), Ordering::Less);
        assert_eq!(
            FileComparator::by_upload_time().reversed().compare(&a, &b),
            Ordering::Less
        );
    }

    #[test]
    fn test_custom_reversed() {
        let by_size = FileComparator::custom(|a, b| a.file_size.cmp(&b.file_size));
        let small = file(1, "x", 1).with_file_size(10);
        let large = file(2, "y", 1).with_file_size(20);
        assert_eq!(by_size.compare(&small, &large), Ordering::Less);
        assert_eq!(by_size.reversed().compare(&small, &large), Ordering::Greater);
    }
}
