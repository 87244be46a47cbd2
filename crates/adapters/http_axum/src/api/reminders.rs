//! JSON REST handlers for reminders.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use petcare_app::ports::{Clock, PetRepository};
use petcare_domain::reminder::Reminder;

use super::parse_pet_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Query string for `GET /api/reminders`.
#[derive(Debug, Default, Deserialize)]
pub struct UpcomingQuery {
    /// Only reminders due within this many days. Overdue reminders are
    /// always included.
    pub horizon_days: Option<i64>,
}

/// `GET /api/pets/:id/reminders`
pub async fn for_pet<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Reminder>>, ApiError>
where
    R: PetRepository + 'static,
    C: Clock + 'static,
{
    let pet_id = parse_pet_id(&id)?;
    let reminders = state.reminder_service.reminders_for_pet(pet_id).await?;
    Ok(Json(reminders))
}

/// `GET /api/reminders?horizon_days=N`
pub async fn upcoming<R, C>(
    State(state): State<AppState<R, C>>,
    query: Result<Query<UpcomingQuery>, QueryRejection>,
) -> Result<Json<Vec<Reminder>>, ApiError>
where
    R: PetRepository + 'static,
    C: Clock + 'static,
{
    let Query(query) = query?;
    let reminders = state.reminder_service.upcoming(query.horizon_days).await?;
    Ok(Json(reminders))
}
