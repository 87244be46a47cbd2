//! TOML roster parsing.

use std::path::Path;

use serde::Deserialize;

use petcare_domain::age::AgeYears;
use petcare_domain::calendar::CalendarDate;
use petcare_domain::error::{PetCareError, ValidationError};
use petcare_domain::id::PetId;
use petcare_domain::pet::Pet;
use petcare_domain::species::Species;

use crate::error::RosterError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RosterFile {
    pets: Vec<RosterEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RosterEntry {
    id: Option<PetId>,
    name: String,
    species: Option<Species>,
    age_years: f64,
    last_vaccination_date: Option<toml::Value>,
    last_deworming_date: Option<toml::Value>,
}

/// Parse roster TOML into validated pets.
///
/// # Errors
///
/// Returns [`RosterError::Parse`] for malformed TOML and
/// [`RosterError::Entry`] for entries that break a pet invariant.
pub fn parse(content: &str) -> Result<Vec<Pet>, RosterError> {
    let file: RosterFile = toml::from_str(content)?;
    file.pets
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let name = entry.name.clone();
            entry.into_pet().map_err(|source| RosterError::Entry {
                index,
                name,
                source,
            })
        })
        .collect()
}

/// Read and parse a roster file. A missing file is an empty roster.
///
/// # Errors
///
/// Returns [`RosterError::Io`] if the file exists but cannot be read, or
/// any error from [`parse`].
pub fn load(path: &Path) -> Result<Vec<Pet>, RosterError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse(&content),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "roster file not found, starting empty");
            Ok(Vec::new())
        }
        Err(err) => Err(RosterError::Io(err)),
    }
}

impl RosterEntry {
    fn into_pet(self) -> Result<Pet, PetCareError> {
        let mut builder = Pet::builder()
            .name(self.name)
            .age_years(AgeYears::new(self.age_years)?);
        if let Some(id) = self.id {
            builder = builder.id(id);
        }
        if let Some(species) = self.species {
            builder = builder.species(species);
        }
        if let Some(value) = self.last_vaccination_date {
            builder = builder.last_vaccination_date(date_from_toml(&value)?);
        }
        if let Some(value) = self.last_deworming_date {
            builder = builder.last_deworming_date(date_from_toml(&value)?);
        }
        builder.build()
    }
}

fn date_from_toml(value: &toml::Value) -> Result<CalendarDate, ValidationError> {
    match value {
        toml::Value::String(text) => text.parse(),
        toml::Value::Datetime(datetime) => datetime.to_string().parse(),
        other => Err(ValidationError::InvalidDate(other.to_string())),
    }
}
