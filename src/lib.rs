//! CurseAPI: client-side model of CurseForge project files.
//!
//! Re-exports the workspace crates so callers can depend on a single crate:
//! configuration and errors from `curseapi-core`, value objects from
//! `curseapi-entity`, and the collection engine from `curseapi-files`.

pub use curseapi_core;
pub use curseapi_entity;
pub use curseapi_files;

pub use curseapi_core::config::{ClientConfig, init_logging};
pub use curseapi_core::types::{FileId, GameId, ProjectId};
pub use curseapi_core::{AppError, AppResult};
pub use curseapi_entity::{File, ReleaseType, TextKind, VersionGroup};
pub use curseapi_files::{
    CachedTextFetcher, FileCollection, FileComparator, FileFilter, FileSource, FilesError,
    ParallelMapper, TextFetcher,
};
