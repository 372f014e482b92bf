//! Core type definitions used across the CurseAPI workspace.

pub mod id;
pub mod sorting;

pub use id::{FileId, GameId, ProjectId};
pub use sorting::SortDirection;
