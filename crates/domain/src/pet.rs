//! Pet: the record reminders are computed for.

use serde::{Deserialize, Serialize};

use crate::age::AgeYears;
use crate::calendar::CalendarDate;
use crate::error::{PetCareError, ValidationError};
use crate::id::PetId;
use crate::service::ServiceKind;
use crate::species::Species;

/// A pet with the service history the reminder rules need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    #[serde(default)]
    pub species: Species,
    pub age_years: AgeYears,
    #[serde(default)]
    pub last_vaccination_date: Option<CalendarDate>,
    #[serde(default)]
    pub last_deworming_date: Option<CalendarDate>,
}

impl Pet {
    /// Create a builder for constructing a [`Pet`].
    #[must_use]
    pub fn builder() -> PetBuilder {
        PetBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PetCareError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), PetCareError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Date the given service was last performed, if ever.
    #[must_use]
    pub fn last_service_date(&self, kind: ServiceKind) -> Option<CalendarDate> {
        match kind {
            ServiceKind::Vaccination => self.last_vaccination_date,
            ServiceKind::Deworming => self.last_deworming_date,
        }
    }

    /// Record that `kind` was performed on `date`.
    pub fn record_service(&mut self, kind: ServiceKind, date: CalendarDate) {
        match kind {
            ServiceKind::Vaccination => self.last_vaccination_date = Some(date),
            ServiceKind::Deworming => self.last_deworming_date = Some(date),
        }
    }
}

/// Step-by-step builder for [`Pet`].
#[derive(Debug, Default)]
pub struct PetBuilder {
    id: Option<PetId>,
    name: Option<String>,
    species: Option<Species>,
    age_years: Option<AgeYears>,
    last_vaccination_date: Option<CalendarDate>,
    last_deworming_date: Option<CalendarDate>,
}

impl PetBuilder {
    #[must_use]
    pub fn id(mut self, id: PetId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn species(mut self, species: Species) -> Self {
        self.species = Some(species);
        self
    }

    #[must_use]
    pub fn age_years(mut self, age: AgeYears) -> Self {
        self.age_years = Some(age);
        self
    }

    #[must_use]
    pub fn last_vaccination_date(mut self, date: CalendarDate) -> Self {
        self.last_vaccination_date = Some(date);
        self
    }

    #[must_use]
    pub fn last_deworming_date(mut self, date: CalendarDate) -> Self {
        self.last_deworming_date = Some(date);
        self
    }

    /// Consume the builder, validate, and return a [`Pet`].
    ///
    /// # Errors
    ///
    /// Returns [`PetCareError::Validation`] if `name` is missing or blank.
    pub fn build(self) -> Result<Pet, PetCareError> {
        let pet = Pet {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            species: self.species.unwrap_or_default(),
            age_years: self.age_years.unwrap_or_default(),
            last_vaccination_date: self.last_vaccination_date,
            last_deworming_date: self.last_deworming_date,
        };
        pet.validate()?;
        Ok(pet)
    }
}
