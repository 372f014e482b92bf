//! File domain entities.

pub mod dependency;
pub mod model;
pub mod release;
pub mod text;

pub use dependency::{FileDependency, RelationType};
pub use model::File;
pub use release::ReleaseType;
pub use text::TextKind;
