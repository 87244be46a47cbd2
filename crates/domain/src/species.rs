//! Species: which kind of animal a pet is.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Animal species. Unrecognised names are kept, lowercased, in [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Species {
    #[default]
    Dog,
    Cat,
    Other(String),
}

impl Species {
    /// Resolve a species name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "dog" => Self::Dog,
            "cat" => Self::Cat,
            _ => Self::Other(normalized),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Other(name) => name,
        }
    }
}

impl FromStr for Species {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for Species {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<Species> for String {
    fn from(species: Species) -> Self {
        species.as_str().to_string()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
