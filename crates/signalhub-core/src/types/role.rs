//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a recipient can hold on the platform.
///
/// Role-targeted notifications only count as relevant when the
/// recipient's profile role matches the target exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A placed domestic worker.
    Worker,
    /// A sponsor household employing workers.
    Sponsor,
    /// A staffing agency managing placements.
    Agency,
}

impl UserRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Sponsor => "sponsor",
            Self::Agency => "agency",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = crate::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "worker" => Ok(Self::Worker),
            "sponsor" => Ok(Self::Sponsor),
            "agency" => Ok(Self::Agency),
            _ => Err(crate::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: worker, sponsor, agency"
            ))),
        }
    }
}
