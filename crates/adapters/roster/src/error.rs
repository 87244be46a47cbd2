//! Roster-specific error type.

use petcare_domain::error::PetCareError;

/// Errors raised while loading a roster file.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The file exists but could not be read.
    #[error("failed to read roster file")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or does not match the roster schema.
    #[error("failed to parse roster file")]
    Parse(#[from] toml::de::Error),

    /// An entry parsed but could not be turned into a pet.
    #[error("invalid roster entry #{index} ({name:?})")]
    Entry {
        index: usize,
        name: String,
        #[source]
        source: PetCareError,
    },
}

impl From<RosterError> for PetCareError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::Entry { source, .. } => source,
            other => Self::Storage(Box::new(other)),
        }
    }
}
