//! Game version entities.

pub mod version;

pub use version::VersionGroup;
