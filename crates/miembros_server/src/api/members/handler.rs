//! Member API handlers.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use miembros_core::{Member, MemberId, MemberPatch, NewMember};

pub const DELETED_MESSAGE: &str = "Miembro eliminado correctamente.";

/// POST /miembros/crear
///
/// Creation never validates or looks anything up, so every failure is a
/// storage fault.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewMember>,
) -> ApiResult<Json<Member>> {
    let member = state
        .with_service(move |service| service.create_member(&payload))
        .await?
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    Ok(Json(member))
}

/// GET /miembros/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<MemberId>,
) -> ApiResult<Json<Member>> {
    let member = state
        .with_service(move |service| service.get_member(id))
        .await?
        .map_err(|err| ApiError::from_service(err, ApiError::LookupNotFound))?;
    Ok(Json(member))
}

/// PUT /miembros/actualizar/{id}
///
/// Partial update; see `MemberPatch` for the merge rules.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<MemberId>,
    Json(patch): Json<MemberPatch>,
) -> ApiResult<Json<Member>> {
    let member = state
        .with_service(move |service| service.update_member(id, &patch))
        .await?
        .map_err(|err| ApiError::from_service(err, ApiError::UpdateNotFound))?;
    Ok(Json(member))
}

/// DELETE /miembros/eliminar/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<MemberId>,
) -> ApiResult<&'static str> {
    state
        .with_service(move |service| service.delete_member(id))
        .await?
        .map_err(|err| ApiError::from_service(err, ApiError::DeleteNotFound))?;
    Ok(DELETED_MESSAGE)
}
