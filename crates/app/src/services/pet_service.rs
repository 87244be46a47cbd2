//! Pet service: use-cases for managing pets and their service history.

use petcare_domain::calendar::CalendarDate;
use petcare_domain::error::{NotFoundError, PetCareError, ValidationError};
use petcare_domain::id::PetId;
use petcare_domain::pet::Pet;
use petcare_domain::service::ServiceKind;

use crate::ports::{Clock, PetRepository};

/// Application service for pet CRUD operations.
pub struct PetService<R, C> {
    repo: R,
    clock: C,
}

impl<R: PetRepository, C: Clock> PetService<R, C> {
    /// Create a new service backed by the given repository and clock.
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Register a new pet after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PetCareError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, pet), fields(pet_name = %pet.name))]
    pub async fn create_pet(&self, pet: Pet) -> Result<Pet, PetCareError> {
        pet.validate()?;
        self.repo.create(pet).await
    }

    /// Look up a pet by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PetCareError::NotFound`] when no pet with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_pet(&self, id: PetId) -> Result<Pet, PetCareError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Pet",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all pets.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_pets(&self) -> Result<Vec<Pet>, PetCareError> {
        self.repo.get_all().await
    }

    /// Update an existing pet.
    ///
    /// # Errors
    ///
    /// Returns [`PetCareError::Validation`] if invariants fail,
    /// [`PetCareError::NotFound`] when no pet with `pet.id` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, pet), fields(pet_id = %pet.id))]
    pub async fn update_pet(&self, pet: Pet) -> Result<Pet, PetCareError> {
        pet.validate()?;
        self.repo.update(pet).await
    }

    /// Record that `kind` was performed for the pet on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::FutureServiceDate`] when `date` is after
    /// today, [`PetCareError::NotFound`] for an unknown pet, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn record_service(
        &self,
        id: PetId,
        kind: ServiceKind,
        date: CalendarDate,
    ) -> Result<Pet, PetCareError> {
        if date > self.clock.today() {
            return Err(ValidationError::FutureServiceDate {
                date: date.to_string(),
            }
            .into());
        }
        let mut pet = self.get_pet(id).await?;
        pet.record_service(kind, date);
        tracing::info!(pet_name = %pet.name, %kind, %date, "service recorded");
        self.repo.update(pet).await
    }

    /// Delete a pet by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_pet(&self, id: PetId) -> Result<(), PetCareError> {
        self.repo.delete(id).await
    }
}
