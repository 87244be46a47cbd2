//! JSON REST handlers for pets.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use petcare_app::ports::{Clock, PetRepository};
use petcare_domain::age::AgeYears;
use petcare_domain::calendar::CalendarDate;
use petcare_domain::id::PetId;
use petcare_domain::pet::Pet;
use petcare_domain::service::ServiceKind;
use petcare_domain::species::Species;

use super::parse_pet_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering or replacing a pet.
#[derive(Deserialize)]
pub struct PetRequest {
    pub name: String,
    pub species: Option<Species>,
    pub age_years: f64,
    pub last_vaccination_date: Option<CalendarDate>,
    pub last_deworming_date: Option<CalendarDate>,
}

impl PetRequest {
    fn into_pet(self, id: Option<PetId>) -> Result<Pet, ApiError> {
        let mut builder = Pet::builder()
            .name(self.name)
            .age_years(AgeYears::new(self.age_years)?);
        if let Some(id) = id {
            builder = builder.id(id);
        }
        if let Some(species) = self.species {
            builder = builder.species(species);
        }
        if let Some(date) = self.last_vaccination_date {
            builder = builder.last_vaccination_date(date);
        }
        if let Some(date) = self.last_deworming_date {
            builder = builder.last_deworming_date(date);
        }
        Ok(builder.build()?)
    }
}

/// Request body for recording a performed service.
#[derive(Deserialize)]
pub struct RecordServiceRequest {
    pub kind: ServiceKind,
    pub date: CalendarDate,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Pet>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, update and record-service endpoints.
pub enum GetResponse {
    Ok(Json<Pet>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Pet>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/pets`
pub async fn list<R, C>(State(state): State<AppState<R, C>>) -> Result<ListResponse, ApiError>
where
    R: PetRepository + 'static,
    C: Clock + 'static,
{
    let pets = state.pet_service.list_pets().await?;
    Ok(ListResponse::Ok(Json(pets)))
}

/// `GET /api/pets/:id`
pub async fn get<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: PetRepository + 'static,
    C: Clock + 'static,
{
    let pet_id = parse_pet_id(&id)?;
    let pet = state.pet_service.get_pet(pet_id).await?;
    Ok(GetResponse::Ok(Json(pet)))
}

/// `POST /api/pets`
pub async fn create<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<PetRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: PetRepository + 'static,
    C: Clock + 'static,
{
    let Json(req) = payload?;
    let pet = req.into_pet(None)?;
    let created = state.pet_service.create_pet(pet).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/pets/:id`
pub async fn update<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
    payload: Result<Json<PetRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    R: PetRepository + 'static,
    C: Clock + 'static,
{
    let pet_id = parse_pet_id(&id)?;
    let Json(req) = payload?;
    let pet = req.into_pet(Some(pet_id))?;
    let updated = state.pet_service.update_pet(pet).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `POST /api/pets/:id/services`
pub async fn record_service<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
    payload: Result<Json<RecordServiceRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    R: PetRepository + 'static,
    C: Clock + 'static,
{
    let pet_id = parse_pet_id(&id)?;
    let Json(req) = payload?;
    let pet = state
        .pet_service
        .record_service(pet_id, req.kind, req.date)
        .await?;
    Ok(GetResponse::Ok(Json(pet)))
}

/// `DELETE /api/pets/:id`
pub async fn delete<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: PetRepository + 'static,
    C: Clock + 'static,
{
    let pet_id = parse_pet_id(&id)?;
    state.pet_service.delete_pet(pet_id).await?;
    Ok(DeleteResponse::NoContent)
}
