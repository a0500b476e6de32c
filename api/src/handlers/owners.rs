//! Owner handlers
//!
//! Read-only owner and pet type endpoints backing the pet forms.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};

use super::pets::wants_json;
use crate::domain::entities::OwnerId;
use crate::domain::ports::{Clock, OwnerRepository};
use crate::error::AppError;
use crate::view::{render_owner, render_pet_types};
use crate::AppState;

/// GET /owners/:owner_id
///
/// Owner details with their pets. Successful pet forms redirect here.
pub async fn show_owner<OR, C>(
    State(state): State<AppState<OR, C>>,
    Path(owner_id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    OR: OwnerRepository + 'static,
    C: Clock + 'static,
{
    let owner = state.pet_form_service.find_owner(OwnerId(owner_id)).await?;

    if wants_json(&headers) {
        Ok(Json(owner).into_response())
    } else {
        Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_owner(&owner),
        )
            .into_response())
    }
}

/// GET /pettypes
///
/// Pet types available in the forms.
pub async fn list_pet_types<OR, C>(
    State(state): State<AppState<OR, C>>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    OR: OwnerRepository + 'static,
    C: Clock + 'static,
{
    let types = state.pet_form_service.pet_types().await?;

    if wants_json(&headers) {
        Ok(Json(types).into_response())
    } else {
        Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_pet_types(&types),
        )
            .into_response())
    }
}
