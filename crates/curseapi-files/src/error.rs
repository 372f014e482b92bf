//! Errors raised by the file collection engine.

use curseapi_core::error::{AppError, ErrorKind};
use curseapi_core::types::{FileId, ProjectId};

/// Error from a collection, filter, or parallel mapping operation.
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// An operation that needs at least one element ran on an empty collection.
    #[error("File collection is empty")]
    EmptyCollection,

    /// An extractor failed while mapping over a collection.
    #[error("Extraction failed for file {file_id}: {source}")]
    Extraction {
        /// The element whose extraction failed.
        file_id: FileId,
        /// The underlying cause.
        #[source]
        source: AppError,
    },

    /// A file was added to a collection bound to another project.
    #[error("File {file_id} belongs to project {found}, expected project {expected}")]
    ProjectMismatch {
        /// The offending file.
        file_id: FileId,
        /// The collection's project.
        expected: ProjectId,
        /// The file's project.
        found: ProjectId,
    },

    /// A collaborator error propagated unchanged.
    #[error(transparent)]
    App(#[from] AppError),
}

impl FilesError {
    /// The offending file's id, for extraction and project-mismatch errors.
    pub fn file_id(&self) -> Option<FileId> {
        match self {
            Self::Extraction { file_id, .. } | Self::ProjectMismatch { file_id, .. } => {
                Some(*file_id)
            }
            _ => None,
        }
    }
}

impl From<FilesError> for AppError {
    fn from(err: FilesError) -> Self {
        match err {
            FilesError::App(inner) => inner,
            FilesError::EmptyCollection => AppError::not_found(err.to_string()),
            FilesError::ProjectMismatch { .. } => AppError::validation(err.to_string()),
            FilesError::Extraction { .. } => {
                let message = err.to_string();
                AppError::with_source(ErrorKind::Fetch, message, err)
            }
        }
    }
}
