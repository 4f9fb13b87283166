//! Functional role labels a requirement is staffed by.

use super::ParseRoleLabelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Functional role held on a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleLabel {
    /// Implements the requirement.
    Developer,
    /// Verifies the requirement.
    Qc,
    /// Designs the requirement.
    Designer,
}

impl RoleLabel {
    /// Every recognized label, in plan order.
    pub const ALL: [Self; 3] = [Self::Developer, Self::Qc, Self::Designer];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Qc => "qc",
            Self::Designer => "designer",
        }
    }
}

impl fmt::Display for RoleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RoleLabel {
    type Error = ParseRoleLabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "developer" => Ok(Self::Developer),
            "qc" => Ok(Self::Qc),
            "designer" => Ok(Self::Designer),
            _ => Err(ParseRoleLabelError(value.to_owned())),
        }
    }
}
