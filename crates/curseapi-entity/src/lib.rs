//! # curseapi-entity
//!
//! Domain value objects for CurseAPI. Every struct in this crate is an
//! immutable record parsed by a collaborator from the remote service.
//! All entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod file;
pub mod game;
pub mod project;

pub use file::{File, FileDependency, RelationType, ReleaseType, TextKind};
pub use game::VersionGroup;
pub use project::{Member, MemberType, Project};
