//! Release stability enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maturity of an uploaded file.
///
/// Variants are declared from least to most stable so that the derived
/// ordering gives `Release > Beta > Alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    /// Experimental build.
    Alpha,
    /// Feature-complete but not yet stable.
    Beta,
    /// Stable release.
    Release,
}

impl ReleaseType {
    /// Stability rank: 0 for the most stable type, increasing as stability drops.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Release => 0,
            Self::Beta => 1,
            Self::Alpha => 2,
        }
    }

    /// Whether this type is at least as stable as `minimum`.
    pub fn matches_minimum_stability(&self, minimum: ReleaseType) -> bool {
        self.rank() <= minimum.rank()
    }

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Beta => "beta",
            Self::Alpha => "alpha",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = curseapi_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "release" => Ok(Self::Release),
            "beta" => Ok(Self::Beta),
            "alpha" => Ok(Self::Alpha),
            _ => Err(curseapi_core::AppError::validation(format!(
                "Invalid release type: '{s}'. Expected one of: release, beta, alpha"
            ))),
        }
    }
}
