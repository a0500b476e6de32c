//! Pet form handlers
//!
//! Create and edit forms for an owner's pets.
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/plain.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::app::{FormOutcome, PetFormView, PetInput};
use crate::domain::entities::{OwnerId, PetId};
use crate::domain::ports::{Clock, OwnerRepository};
use crate::error::AppError;
use crate::view::{render_pet_form, render_saved};
use crate::AppState;

/// Check if the client wants JSON response
pub(crate) fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// Submitted pet form fields
///
/// Only `name`, `type` and `birthDate` are bound; an `id` field is ignored
/// so a submission cannot retarget another pet.
#[derive(Debug, Deserialize)]
pub struct PetFormRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    #[serde(rename = "birthDate")]
    pub birth_date: Option<String>,
}

impl From<PetFormRequest> for PetInput {
    fn from(request: PetFormRequest) -> Self {
        PetInput {
            name: request.name,
            pet_type: request.pet_type,
            birth_date: request.birth_date,
        }
    }
}

/// Response body after a successful save
#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub message: String,
    pub redirect_to: String,
}

/// GET /owners/:owner_id/pets/new
///
/// Display the empty pet creation form.
pub async fn init_creation_form<OR, C>(
    State(state): State<AppState<OR, C>>,
    Path(owner_id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    OR: OwnerRepository + 'static,
    C: Clock + 'static,
{
    let view = state
        .pet_form_service
        .init_creation_form(OwnerId(owner_id))
        .await?;

    Ok(form_response(view, wants_json(&headers)))
}

/// POST /owners/:owner_id/pets/new
///
/// Create a pet. Redirects to the owner on success, otherwise shows the form
/// again with field errors.
pub async fn process_creation_form<OR, C>(
    State(state): State<AppState<OR, C>>,
    Path(owner_id): Path<i32>,
    headers: HeaderMap,
    Form(form): Form<PetFormRequest>,
) -> Result<Response, AppError>
where
    OR: OwnerRepository + 'static,
    C: Clock + 'static,
{
    let outcome = state
        .pet_form_service
        .process_creation_form(OwnerId(owner_id), form.into())
        .await?;

    Ok(outcome_response(outcome, wants_json(&headers)))
}

/// GET /owners/:owner_id/pets/:pet_id/edit
///
/// Display the edit form for an existing pet.
pub async fn init_update_form<OR, C>(
    State(state): State<AppState<OR, C>>,
    Path((owner_id, pet_id)): Path<(i32, i32)>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    OR: OwnerRepository + 'static,
    C: Clock + 'static,
{
    let view = state
        .pet_form_service
        .init_update_form(OwnerId(owner_id), PetId(pet_id))
        .await?;

    Ok(form_response(view, wants_json(&headers)))
}

/// POST /owners/:owner_id/pets/:pet_id/edit
///
/// Update an existing pet.
pub async fn process_update_form<OR, C>(
    State(state): State<AppState<OR, C>>,
    Path((owner_id, pet_id)): Path<(i32, i32)>,
    headers: HeaderMap,
    Form(form): Form<PetFormRequest>,
) -> Result<Response, AppError>
where
    OR: OwnerRepository + 'static,
    C: Clock + 'static,
{
    let outcome = state
        .pet_form_service
        .process_update_form(OwnerId(owner_id), PetId(pet_id), form.into())
        .await?;

    Ok(outcome_response(outcome, wants_json(&headers)))
}

fn form_response(view: PetFormView, json_mode: bool) -> Response {
    if json_mode {
        Json(view).into_response()
    } else {
        (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_pet_form(&view),
        )
            .into_response()
    }
}

fn outcome_response(outcome: FormOutcome, json_mode: bool) -> Response {
    match outcome {
        FormOutcome::Redisplay(view) => form_response(view, json_mode),
        FormOutcome::Saved {
            redirect_to,
            message,
        } => {
            let location = format!("/owners/{}", redirect_to);

            if json_mode {
                (
                    StatusCode::SEE_OTHER,
                    [(header::LOCATION, location.clone())],
                    Json(SavedResponse {
                        message,
                        redirect_to: location,
                    }),
                )
                    .into_response()
            } else {
                let body = render_saved(&message, &location);
                (
                    StatusCode::SEE_OTHER,
                    [
                        (header::LOCATION, location),
                        (
                            header::CONTENT_TYPE,
                            "text/plain; charset=utf-8".to_string(),
                        ),
                    ],
                    body,
                )
                    .into_response()
            }
        }
    }
}
