//! Project member entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a member holds on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberType {
    /// Project owner.
    Owner,
    /// Translator.
    Translator,
    /// Maintainer.
    Maintainer,
    /// Contributor.
    Contributor,
    /// Author.
    #[serde(rename = "AddOnAuthor")]
    Author,
    /// Former author.
    #[serde(rename = "Former AddOnAuthor")]
    FormerAuthor,
    /// Ticket manager.
    #[serde(rename = "Ticket Manger")]
    TicketManager,
    /// Tester.
    Tester,
    /// Artist.
    Artist,
    /// Mascot.
    Mascot,
    /// Role reported by the service but not recognised.
    Unknown,
}

impl MemberType {
    /// All variants in declaration order.
    pub const ALL: [MemberType; 11] = [
        Self::Owner,
        Self::Translator,
        Self::Maintainer,
        Self::Contributor,
        Self::Author,
        Self::FormerAuthor,
        Self::TicketManager,
        Self::Tester,
        Self::Artist,
        Self::Mascot,
        Self::Unknown,
    ];

    /// The name the service uses for this role.
    pub fn service_name(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Translator => "Translator",
            Self::Maintainer => "Maintainer",
            Self::Contributor => "Contributor",
            Self::Author => "AddOnAuthor",
            Self::FormerAuthor => "Former AddOnAuthor",
            // The service misspells this one.
            Self::TicketManager => "Ticket Manger",
            Self::Tester => "Tester",
            Self::Artist => "Artist",
            Self::Mascot => "Mascot",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse a service name, ignoring case. Returns `None` for unrecognised names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.service_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.service_name())
    }
}

/// A user credited on a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Member {
    /// The member's role.
    pub member_type: MemberType,
    /// The member's username.
    pub username: String,
}

impl Member {
    /// Create a member. A missing role is recorded as [`MemberType::Unknown`].
    pub fn new(member_type: Option<MemberType>, username: impl Into<String>) -> Self {
        Self {
            member_type: member_type.unwrap_or(MemberType::Unknown),
            username: username.into(),
        }
    }

    /// Profile URL of this member on the site rooted at `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/members/{}", base_url.trim_end_matches('/'), self.username)
    }
}
