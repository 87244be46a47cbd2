//! In-memory [`PetRepository`] implementation.

use std::collections::HashMap;
use std::future::Future;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use petcare_app::ports::PetRepository;
use petcare_domain::error::{NotFoundError, PetCareError};
use petcare_domain::id::PetId;
use petcare_domain::pet::Pet;

use crate::error::RosterError;
use crate::roster;

/// Pets held in process memory. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPetRepository {
    pets: Arc<RwLock<HashMap<PetId, Pet>>>,
}

impl InMemoryPetRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `pets`. Later duplicates of an
    /// id replace earlier ones.
    #[must_use]
    pub fn with_pets(pets: impl IntoIterator<Item = Pet>) -> Self {
        let pets = pets.into_iter().map(|pet| (pet.id, pet)).collect();
        Self {
            pets: Arc::new(RwLock::new(pets)),
        }
    }

    /// Seed a repository from a TOML roster file (see the crate docs).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] when the file cannot be read or parsed.
    pub fn from_roster_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let pets = roster::load(path)?;
        tracing::info!(path = %path.display(), count = pets.len(), "roster loaded");
        Ok(Self::with_pets(pets))
    }

    /// Number of stored pets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pets.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PetRepository for InMemoryPetRepository {
    fn create(&self, pet: Pet) -> impl Future<Output = Result<Pet, PetCareError>> + Send {
        self.pets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(pet.id, pet.clone());
        async { Ok(pet) }
    }

    fn get_by_id(
        &self,
        id: PetId,
    ) -> impl Future<Output = Result<Option<Pet>, PetCareError>> + Send {
        let result = self
            .pets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned();
        async { Ok(result) }
    }

    /// All pets, ordered by name then id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Pet>, PetCareError>> + Send {
        let mut result: Vec<Pet> = self
            .pets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        async { Ok(result) }
    }

    fn update(&self, pet: Pet) -> impl Future<Output = Result<Pet, PetCareError>> + Send {
        let result = {
            let mut pets = self.pets.write().unwrap_or_else(PoisonError::into_inner);
            match pets.get_mut(&pet.id) {
                Some(slot) => {
                    *slot = pet.clone();
                    Ok(pet)
                }
                None => Err(NotFoundError {
                    entity: "Pet",
                    id: pet.id.to_string(),
                }
                .into()),
            }
        };
        async { result }
    }

    fn delete(&self, id: PetId) -> impl Future<Output = Result<(), PetCareError>> + Send {
        self.pets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petcare_domain::age::AgeYears;

    fn pet(name: &str) -> Pet {
        Pet::builder()
            .name(name)
            .age_years(AgeYears::new(1.0).unwrap())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_get_pet() {
        let repo = InMemoryPetRepository::new();
        let rex = pet("Rex");

        repo.create(rex.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(rex.id).await.unwrap(), Some(rex));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn should_list_pets_sorted_by_name() {
        let repo = InMemoryPetRepository::with_pets([pet("Rex"), pet("Bo"), pet("Luna")]);

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["Bo", "Luna", "Rex"]);
    }

    #[tokio::test]
    async fn should_share_store_between_clones() {
        let repo = InMemoryPetRepository::new();
        let other = repo.clone();

        repo.create(pet("Rex")).await.unwrap();

        assert_eq!(other.len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_pet() {
        let repo = InMemoryPetRepository::new();
        let result = repo.update(pet("Ghost")).await;
        assert!(matches!(result, Err(PetCareError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_replace_pet_on_update() {
        let repo = InMemoryPetRepository::new();
        let mut rex = repo.create(pet("Rex")).await.unwrap();

        rex.name = "Rex II".to_string();
        repo.update(rex.clone()).await.unwrap();

        let stored = repo.get_by_id(rex.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Rex II");
    }

    #[tokio::test]
    async fn should_delete_pet() {
        let repo = InMemoryPetRepository::new();
        let rex = repo.create(pet("Rex")).await.unwrap();

        repo.delete(rex.id).await.unwrap();
        repo.delete(rex.id).await.unwrap();

        assert!(repo.is_empty());
    }

    #[test]
    fn should_start_empty_when_roster_file_missing() {
        let repo = InMemoryPetRepository::from_roster_file("no-such-roster.toml").unwrap();
        assert!(repo.is_empty());
    }
}
