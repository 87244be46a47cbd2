//! Storage port: repository trait for pet records.

use std::future::Future;

use petcare_domain::error::PetCareError;
use petcare_domain::id::PetId;
use petcare_domain::pet::Pet;

/// CRUD access to pets.
pub trait PetRepository: Send + Sync {
    fn create(&self, pet: Pet) -> impl Future<Output = Result<Pet, PetCareError>> + Send;

    fn get_by_id(
        &self,
        id: PetId,
    ) -> impl Future<Output = Result<Option<Pet>, PetCareError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Pet>, PetCareError>> + Send;

    /// Replace a stored pet.
    ///
    /// Implementations return [`PetCareError::NotFound`] when no pet with
    /// `pet.id` exists.
    fn update(&self, pet: Pet) -> impl Future<Output = Result<Pet, PetCareError>> + Send;

    /// Remove a pet. Deleting an unknown id is not an error.
    fn delete(&self, id: PetId) -> impl Future<Output = Result<(), PetCareError>> + Send;
}
