//! Project entity model.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use curseapi_core::types::{GameId, ProjectId};

use super::member::Member;

/// A CurseForge project.
///
/// Two projects are equal when their ids are equal; projects sort by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Short summary.
    #[serde(default)]
    pub summary: String,
    /// The game this project belongs to.
    pub game_id: GameId,
    /// Total download count.
    #[serde(default)]
    pub download_count: u64,
    /// Credited members; the first one is the main author.
    #[serde(default)]
    pub authors: Vec<Member>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether the project is flagged experimental.
    #[serde(default)]
    pub experimental: bool,
}

impl Project {
    /// The main author, if any members are credited.
    pub fn author(&self) -> Option<&Member> {
        self.authors.first()
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Project {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Project {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.id == other.id {
            return Ordering::Equal;
        }
        self.name.cmp(&other.name).then(self.id.cmp(&other.id))
    }
}
