//! Shared application state for axum handlers.

use std::sync::Arc;

use petcare_app::ports::{Clock, PetRepository};
use petcare_app::services::pet_service::PetService;
use petcare_app::services::reminder_service::ReminderService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and clock to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R, C> {
    /// Pet CRUD service.
    pub pet_service: Arc<PetService<R, C>>,
    /// Reminder computation service.
    pub reminder_service: Arc<ReminderService<R, C>>,
}

impl<R, C> Clone for AppState<R, C> {
    fn clone(&self) -> Self {
        Self {
            pet_service: Arc::clone(&self.pet_service),
            reminder_service: Arc::clone(&self.reminder_service),
        }
    }
}

impl<R, C> AppState<R, C>
where
    R: PetRepository + 'static,
    C: Clock + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(pet_service: PetService<R, C>, reminder_service: ReminderService<R, C>) -> Self {
        Self {
            pet_service: Arc::new(pet_service),
            reminder_service: Arc::new(reminder_service),
        }
    }
}
