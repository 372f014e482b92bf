//! File entity model.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use curseapi_core::types::{FileId, ProjectId};

use super::dependency::{FileDependency, RelationType};
use super::release::ReleaseType;

/// One downloadable release of a project.
///
/// Files are never mutated after construction; collections share them
/// behind `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Unique file identifier within the project.
    pub id: FileId,
    /// The project this file belongs to.
    pub project_id: ProjectId,
    /// Human-readable name shown on the project page.
    pub display_name: String,
    /// Name of the uploaded archive.
    pub file_name: String,
    /// Release stability.
    pub release_type: ReleaseType,
    /// Game version strings this file supports.
    #[serde(default)]
    pub game_versions: BTreeSet<String>,
    /// When the file was uploaded.
    pub upload_time: DateTime<Utc>,
    /// Size of the archive in bytes.
    #[serde(default)]
    pub file_size: u64,
    /// Direct download URL, if the listing provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// Projects this file depends on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<FileDependency>,
}

impl File {
    /// Create a release file with only its identity set.
    pub fn new(project_id: ProjectId, id: FileId) -> Self {
        Self {
            id,
            project_id,
            display_name: String::new(),
            file_name: String::new(),
            release_type: ReleaseType::Release,
            game_versions: BTreeSet::new(),
            upload_time: DateTime::<Utc>::default(),
            file_size: 0,
            download_url: None,
            dependencies: Vec::new(),
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Set the archive file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Set the release type.
    pub fn with_release_type(mut self, release_type: ReleaseType) -> Self {
        self.release_type = release_type;
        self
    }

    /// Set the supported game versions.
    pub fn with_game_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.game_versions = versions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the upload time.
    pub fn with_upload_time(mut self, upload_time: DateTime<Utc>) -> Self {
        self.upload_time = upload_time;
        self
    }

    /// Set the archive size.
    pub fn with_file_size(mut self, file_size: u64) -> Self {
        self.file_size = file_size;
        self
    }

    /// Set the download URL.
    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(url.into());
        self
    }

    /// Set the dependencies.
    pub fn with_dependencies(mut self, dependencies: Vec<FileDependency>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Whether the file lists the given game version string.
    pub fn supports_version(&self, version: &str) -> bool {
        self.game_versions.contains(version)
    }

    /// Dependencies with the given relation. [`RelationType::AllTypes`] returns all of them.
    pub fn dependencies_of(&self, relation: RelationType) -> Vec<&FileDependency> {
        self.dependencies
            .iter()
            .filter(|dep| dep.relation_type.matches(relation))
            .collect()
    }
}

impl From<&File> for FileId {
    fn from(file: &File) -> Self {
        file.id
    }
}
