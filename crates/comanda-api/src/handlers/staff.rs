//! Kitchen staff handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use comanda_core::error::AppError;
use comanda_entity::staff::KitchenStaff;

use crate::dto::request::KitchenStaffPayload;
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::Auth;
use crate::policy::kitchen_staff;
use crate::state::AppState;

/// GET /api/kitchen-staff
pub async fn list(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<KitchenStaff>>, ApiError> {
    kitchen_staff::LIST.authorize(auth.principal())?;
    Ok(Json(state.staff_repo.find_all().await?))
}

/// GET /api/kitchen-staff/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<KitchenStaff>, ApiError> {
    kitchen_staff::READ.authorize_owner(auth.principal(), id)?;

    let staff = state
        .staff_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Kitchen staff {id} not found")))?;
    Ok(Json(staff))
}

/// POST /api/kitchen-staff
pub async fn create(
    State(state): State<AppState>,
    auth: Auth,
    Json(req): Json<KitchenStaffPayload>,
) -> Result<Json<KitchenStaff>, ApiError> {
    kitchen_staff::CREATE.authorize(auth.principal())?;
    validate_dto(&req)?;

    Ok(Json(state.staff_repo.create(&req.into()).await?))
}

/// PUT /api/kitchen-staff/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
    Json(req): Json<KitchenStaffPayload>,
) -> Result<Json<KitchenStaff>, ApiError> {
    kitchen_staff::UPDATE.authorize_owner(auth.principal(), id)?;
    validate_dto(&req)?;

    Ok(Json(state.staff_repo.update(id, &req.into()).await?))
}

/// DELETE /api/kitchen-staff/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    kitchen_staff::DELETE.authorize(auth.principal())?;

    state.staff_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/kitchen-staff/{id}/lock
pub async fn lock(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<KitchenStaff>, ApiError> {
    kitchen_staff::LOCK.authorize(auth.principal())?;

    let staff = state
        .staff_repo
        .find_by_id_locked(id, state.lock_dwell())
        .await?;
    Ok(Json(staff))
}
