//! Service kinds: the recurring pet-care services that have a cadence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A recurring service whose next due date is computed from age bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Vaccination,
    Deworming,
}

impl ServiceKind {
    pub const ALL: [Self; 2] = [Self::Vaccination, Self::Deworming];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vaccination => "vaccination",
            Self::Deworming => "deworming",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vaccination" => Ok(Self::Vaccination),
            "deworming" => Ok(Self::Deworming),
            other => Err(ValidationError::UnknownServiceKind(other.to_string())),
        }
    }
}
