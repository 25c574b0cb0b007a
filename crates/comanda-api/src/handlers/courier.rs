//! Courier handlers. All courier management is administrator-only.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use comanda_core::error::AppError;
use comanda_entity::courier::Courier;

use crate::dto::request::CourierPayload;
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::Auth;
use crate::policy::couriers;
use crate::state::AppState;

/// GET /api/couriers
pub async fn list(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<Courier>>, ApiError> {
    couriers::ALL.authorize(auth.principal())?;
    Ok(Json(state.courier_repo.find_all().await?))
}

/// GET /api/couriers/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Courier>, ApiError> {
    couriers::ALL.authorize(auth.principal())?;

    let courier = state
        .courier_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Courier {id} not found")))?;
    Ok(Json(courier))
}

/// POST /api/couriers
pub async fn create(
    State(state): State<AppState>,
    auth: Auth,
    Json(req): Json<CourierPayload>,
) -> Result<Json<Courier>, ApiError> {
    couriers::ALL.authorize(auth.principal())?;
    validate_dto(&req)?;

    Ok(Json(state.courier_repo.create(&req.into()).await?))
}

/// PUT /api/couriers/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
    Json(req): Json<CourierPayload>,
) -> Result<Json<Courier>, ApiError> {
    couriers::ALL.authorize(auth.principal())?;
    validate_dto(&req)?;

    Ok(Json(state.courier_repo.update(id, &req.into()).await?))
}

/// DELETE /api/couriers/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    couriers::ALL.authorize(auth.principal())?;

    state.courier_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/couriers/{id}/lock
pub async fn lock(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Courier>, ApiError> {
    couriers::ALL.authorize(auth.principal())?;

    let courier = state
        .courier_repo
        .find_by_id_locked(id, state.lock_dwell())
        .await?;
    Ok(Json(courier))
}
