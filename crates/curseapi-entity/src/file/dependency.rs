//! File dependency entities.

use serde::{Deserialize, Serialize};
use std::fmt;

use curseapi_core::types::ProjectId;

/// How a file relates to another project it depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationType {
    /// Matches every relation; used when querying.
    #[serde(rename = "All Types")]
    AllTypes,
    /// The dependency is bundled inside the file.
    #[serde(rename = "Embedded")]
    EmbeddedLibrary,
    /// The dependency adds optional functionality.
    #[serde(rename = "Optional")]
    OptionalDependency,
    /// The dependency must be installed.
    #[serde(rename = "Required")]
    RequiredDependency,
    /// A companion tool.
    Tool,
    /// The projects cannot be installed together.
    Incompatible,
    /// The dependency is included in a modpack.
    Include,
    /// The service reported a relation this client does not know.
    Unknown,
}

impl RelationType {
    /// All variants in declaration order.
    pub const ALL: [RelationType; 8] = [
        Self::AllTypes,
        Self::EmbeddedLibrary,
        Self::OptionalDependency,
        Self::RequiredDependency,
        Self::Tool,
        Self::Incompatible,
        Self::Include,
        Self::Unknown,
    ];

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AllTypes => "All Types",
            Self::EmbeddedLibrary => "Embedded Library",
            Self::OptionalDependency => "Optional Dependency",
            Self::RequiredDependency => "Required Dependency",
            Self::Tool => "Tool",
            Self::Incompatible => "Incompatible",
            Self::Include => "Include",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse a display name, ignoring case. Unrecognised names map to [`RelationType::Unknown`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|relation| relation.display_name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::Unknown)
    }

    /// Whether a dependency of this relation satisfies a query for `wanted`.
    pub fn matches(&self, wanted: RelationType) -> bool {
        wanted == Self::AllTypes || *self == wanted
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A dependency of a file on another project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileDependency {
    /// The project depended upon.
    pub project_id: ProjectId,
    /// The kind of relation.
    pub relation_type: RelationType,
}

impl FileDependency {
    /// Create a new dependency.
    pub fn new(project_id: ProjectId, relation_type: RelationType) -> Self {
        Self {
            project_id,
            relation_type,
        }
    }
}
