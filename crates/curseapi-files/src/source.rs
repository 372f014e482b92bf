//! Collaborator traits supplying files and derived text.
//!
//! Transport and parsing live outside this crate. Implementations report
//! failures as [`AppError`](curseapi_core::AppError) values of kind `Fetch`,
//! which the engine propagates unchanged.

use async_trait::async_trait;

use curseapi_core::result::AppResult;
use curseapi_core::types::ProjectId;
use curseapi_entity::{File, TextKind};

/// Supplies the parsed file listing of a project.
#[async_trait]
pub trait FileSource: Send + Sync + std::fmt::Debug {
    /// Fetch every file of `project_id`.
    async fn fetch_file_list(&self, project_id: ProjectId) -> AppResult<Vec<File>>;
}

/// Fetches text fields that are not part of the file listing.
#[async_trait]
pub trait TextFetcher: Send + Sync + std::fmt::Debug {
    /// Fetch the `kind` text of `file`.
    async fn fetch_text(&self, file: &File, kind: TextKind) -> AppResult<String>;
}
