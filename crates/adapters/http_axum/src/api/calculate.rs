//! Stateless calculator endpoints for callers that keep their own records.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use petcare_app::ports::{Clock, PetRepository};
use petcare_domain::age::AgeYears;
use petcare_domain::calendar::CalendarDate;
use petcare_domain::message::{ReminderKind, ReminderMessage, reminder_message};
use petcare_domain::schedule::Cadence;
use petcare_domain::service::ServiceKind;
use petcare_domain::species::Species;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /api/calculate/next-due`.
#[derive(Deserialize)]
pub struct NextDueRequest {
    pub kind: ServiceKind,
    pub last_date: CalendarDate,
    pub age_years: f64,
    #[serde(default)]
    pub species: Species,
}

/// Response body for `POST /api/calculate/next-due`.
#[derive(Debug, Serialize)]
pub struct NextDueResponse {
    pub kind: ServiceKind,
    pub last_date: CalendarDate,
    pub cadence: Cadence,
    pub due_date: CalendarDate,
    pub days_until_due: i64,
}

/// Request body for `POST /api/calculate/message`.
#[derive(Deserialize)]
pub struct MessageRequest {
    pub kind: ReminderKind,
    pub days_until_due: i64,
    pub pet_name: String,
}

/// `POST /api/calculate/next-due`
pub async fn next_due<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<NextDueRequest>, JsonRejection>,
) -> Result<Json<NextDueResponse>, ApiError>
where
    R: PetRepository + 'static,
    C: Clock + 'static,
{
    let Json(req) = payload?;
    let age = AgeYears::new(req.age_years)?;
    let service = &state.reminder_service;
    let cadence = service.cadence_for(req.kind, age, &req.species);
    let due_date = cadence.apply(req.last_date);

    Ok(Json(NextDueResponse {
        kind: req.kind,
        last_date: req.last_date,
        cadence,
        due_date,
        days_until_due: CalendarDate::days_between(service.today(), due_date),
    }))
}

/// `POST /api/calculate/message`
pub async fn message(
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<ReminderMessage>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(reminder_message(
        &req.kind,
        req.days_until_due,
        &req.pet_name,
    )))
}
