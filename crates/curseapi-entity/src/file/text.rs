//! Kinds of derived text fetched per file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A text field that is not part of the file listing and must be fetched separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    /// The file's display name.
    DisplayName,
    /// The changelog as returned by the service (HTML).
    Changelog,
    /// The changelog rendered to plain text.
    ChangelogPlainText,
}

impl TextKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DisplayName => "display_name",
            Self::Changelog => "changelog",
            Self::ChangelogPlainText => "changelog_plain_text",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
