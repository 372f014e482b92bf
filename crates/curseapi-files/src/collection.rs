//! Ordered, id-keyed container of project files.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use curseapi_core::types::{FileId, ProjectId};
use curseapi_entity::File;

use crate::comparator::FileComparator;
use crate::error::FilesError;
use crate::filter::FileFilter;
use crate::source::FileSource;

/// An ordered set of [`File`]s keyed by id.
///
/// Iteration order always matches the active [`FileComparator`]. Elements
/// are shared behind `Arc`, so cloning a collection copies only the
/// container. Mutating a clone never affects the original.
///
/// Equality compares element sets and ignores the active ordering.
#[derive(Debug, Clone, Default)]
pub struct FileCollection {
    /// Elements in comparator order.
    files: Vec<Arc<File>>,
    /// Position of each element in `files`.
    index: HashMap<FileId, usize>,
    /// Active ordering.
    comparator: FileComparator,
    /// Project shared by every element, when the collection is bound to one.
    project_id: Option<ProjectId>,
}

impl FileCollection {
    /// Create an empty collection ordered oldest first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from raw files.
    ///
    /// Files whose id is already present are dropped; the first occurrence wins.
    pub fn from_files<I>(files: I) -> Self
    where
        I: IntoIterator<Item = File>,
    {
        Self::from_shared(files.into_iter().map(Arc::new))
    }

    /// Build a collection from files that are already shared.
    pub fn from_shared<I>(files: I) -> Self
    where
        I: IntoIterator<Item = Arc<File>>,
    {
        let mut collection = Self::new();
        let mut seen = HashSet::new();
        for file in files {
            if !seen.insert(file.id) {
                debug!(file_id = %file.id, "Dropping duplicate file id");
                continue;
            }
            collection.files.push(file);
        }
        collection.resort();
        collection
    }

    /// Build a collection bound to `project_id`, rejecting files of any other project.
    pub fn for_project<I>(project_id: ProjectId, files: I) -> Result<Self, FilesError>
    where
        I: IntoIterator<Item = File>,
    {
        let files: Vec<File> = files.into_iter().collect();
        if let Some(stray) = files.iter().find(|f| f.project_id != project_id) {
            return Err(FilesError::ProjectMismatch {
                file_id: stray.id,
                expected: project_id,
                found: stray.project_id,
            });
        }

        let mut collection = Self::from_files(files);
        collection.project_id = Some(project_id);
        Ok(collection)
    }

    /// Fetch a project's file list from a collaborator and build a collection from it.
    pub async fn fetch(
        source: &dyn FileSource,
        project_id: ProjectId,
    ) -> Result<Self, FilesError> {
        let files = source.fetch_file_list(project_id).await?;
        debug!(%project_id, count = files.len(), "Fetched file list");
        Self::for_project(project_id, files)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the collection has no elements.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The project all elements belong to, if the collection is bound to one.
    pub fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// The active ordering.
    pub fn comparator(&self) -> &FileComparator {
        &self.comparator
    }

    /// Elements in the active order.
    pub fn files(&self) -> &[Arc<File>] {
        &self.files
    }

    /// Iterate over elements in the active order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<File>> {
        self.files.iter()
    }

    /// Element ids in the active order.
    pub fn ids(&self) -> Vec<FileId> {
        self.files.iter().map(|f| f.id).collect()
    }

    /// Whether an element with this id is present.
    pub fn contains(&self, id: FileId) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up an element by id. Returns `None` when absent.
    pub fn file_with_id(&self, id: FileId) -> Option<&Arc<File>> {
        self.index.get(&id).map(|&pos| &self.files[pos])
    }

    /// The element ranked first by the active ordering.
    pub fn first(&self) -> Result<&Arc<File>, FilesError> {
        self.files.first().ok_or(FilesError::EmptyCollection)
    }

    /// The element ranked last by the active ordering.
    pub fn last(&self) -> Result<&Arc<File>, FilesError> {
        self.files.last().ok_or(FilesError::EmptyCollection)
    }

    /// A new collection with the same elements ordered by `comparator`.
    ///
    /// The receiver is left untouched.
    pub fn with_comparator(&self, comparator: FileComparator) -> Self {
        let mut sorted = self.clone();
        sorted.sort(comparator);
        sorted
    }

    /// Re-sort in place by `comparator`, which becomes the active ordering.
    pub fn sort(&mut self, comparator: FileComparator) {
        debug!(?comparator, count = self.files.len(), "Sorting file collection");
        self.comparator = comparator;
        self.resort();
    }

    /// Remove every element `filter` rejects. Returns whether anything was removed.
    pub fn filter(&mut self, filter: &FileFilter) -> bool {
        let before = self.files.len();
        self.files.retain(|file| filter.accepts(file));
        let removed = before - self.files.len();

        if removed > 0 {
            self.reindex();
        }

        debug!(before, removed, "Filtered file collection");
        removed > 0
    }

    /// Insert a file at its sorted position.
    ///
    /// Returns `false` when an element with the same id is already present.
    /// Fails when the collection is bound to a different project.
    pub fn insert(&mut self, file: impl Into<Arc<File>>) -> Result<bool, FilesError> {
        let file = file.into();

        if let Some(expected) = self.project_id {
            if file.project_id != expected {
                return Err(FilesError::ProjectMismatch {
                    file_id: file.id,
                    expected,
                    found: file.project_id,
                });
            }
        }

        if self.contains(file.id) {
            return Ok(false);
        }

        let comparator = &self.comparator;
        let pos = self
            .files
            .partition_point(|probe| comparator.compare(probe, &file).is_lt());
        self.files.insert(pos, file);
        self.reindex();
        Ok(true)
    }

    /// Remove and return the element with this id.
    pub fn remove(&mut self, id: FileId) -> Option<Arc<File>> {
        let pos = self.index.get(&id).copied()?;
        let removed = self.files.remove(pos);
        self.reindex();
        Some(removed)
    }

    /// Consume the collection, returning its elements in the active order.
    pub fn into_files(self) -> Vec<Arc<File>> {
        self.files
    }

    fn resort(&mut self) {
        let comparator = &self.comparator;
        self.files.sort_by(|a, b| comparator.compare(a, b));
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index = self
            .files
            .iter()
            .enumerate()
            .map(|(pos, file)| (file.id, pos))
            .collect();
    }
}

impl PartialEq for FileCollection {
    fn eq(&self, other: &Self) -> bool {
        self.files.len() == other.files.len()
            && self.files.iter().all(|file| {
                other
                    .file_with_id(file.id)
                    .is_some_and(|theirs| Arc::ptr_eq(file, theirs) || **file == **theirs)
            })
    }
}

impl Eq for FileCollection {}

impl FromIterator<File> for FileCollection {
    fn from_iter<I: IntoIterator<Item = File>>(iter: I) -> Self {
        Self::from_files(iter)
    }
}

impl<'a> IntoIterator for &'a FileCollection {
    type Item = &'a Arc<File>;
    type IntoIter = std::slice::Iter<'a, Arc<File>>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
