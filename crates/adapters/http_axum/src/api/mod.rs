//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod calculate;
#[allow(clippy::missing_errors_doc)]
pub mod pets;
#[allow(clippy::missing_errors_doc)]
pub mod reminders;

use std::str::FromStr;

use axum::Router;
use axum::routing::{get, post};

use petcare_app::ports::{Clock, PetRepository};
use petcare_domain::error::ValidationError;
use petcare_domain::id::PetId;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, C>() -> Router<AppState<R, C>>
where
    R: PetRepository + 'static,
    C: Clock + 'static,
{
    Router::new()
        // Pets
        .route("/pets", get(pets::list::<R, C>).post(pets::create::<R, C>))
        .route(
            "/pets/{id}",
            get(pets::get::<R, C>)
                .put(pets::update::<R, C>)
                .delete(pets::delete::<R, C>),
        )
        .route("/pets/{id}/services", post(pets::record_service::<R, C>))
        // Reminders
        .route("/pets/{id}/reminders", get(reminders::for_pet::<R, C>))
        .route("/reminders", get(reminders::upcoming::<R, C>))
        // Stateless calculators
        .route("/calculate/next-due", post(calculate::next_due::<R, C>))
        .route("/calculate/message", post(calculate::message))
}

fn parse_pet_id(raw: &str) -> Result<PetId, ValidationError> {
    PetId::from_str(raw)
}
