//! Delivery-assignment handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use comanda_core::error::AppError;
use comanda_entity::assignment::DeliveryAssignment;

use crate::dto::request::AssignmentPayload;
use crate::error::ApiError;
use crate::extractors::Auth;
use crate::policy::assignments;
use crate::state::AppState;

/// GET /api/assignments
pub async fn list(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<DeliveryAssignment>>, ApiError> {
    assignments::LIST.authorize(auth.principal())?;
    Ok(Json(state.assignment_repo.find_all().await?))
}

/// GET /api/assignments/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<DeliveryAssignment>, ApiError> {
    assignments::READ.authorize(auth.principal())?;

    let assignment = state
        .assignment_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Assignment {id} not found")))?;
    Ok(Json(assignment))
}

/// GET /api/assignments/order/{order_id}
pub async fn by_order(
    State(state): State<AppState>,
    auth: Auth,
    Path(order_id): Path<i64>,
) -> Result<Json<Vec<DeliveryAssignment>>, ApiError> {
    assignments::BY_ORDER.authorize(auth.principal())?;
    Ok(Json(state.assignment_repo.find_by_order(order_id).await?))
}

/// GET /api/assignments/courier/{courier_id}
pub async fn by_courier(
    State(state): State<AppState>,
    auth: Auth,
    Path(courier_id): Path<i64>,
) -> Result<Json<Vec<DeliveryAssignment>>, ApiError> {
    assignments::BY_COURIER.authorize(auth.principal())?;
    Ok(Json(
        state.assignment_repo.find_by_courier(courier_id).await?,
    ))
}

/// GET /api/assignments/pending
pub async fn pending(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<DeliveryAssignment>>, ApiError> {
    assignments::PENDING.authorize(auth.principal())?;
    Ok(Json(state.assignment_repo.find_pending().await?))
}

/// POST /api/assignments
pub async fn create(
    State(state): State<AppState>,
    auth: Auth,
    Json(req): Json<AssignmentPayload>,
) -> Result<Json<DeliveryAssignment>, ApiError> {
    assignments::CREATE.authorize(auth.principal())?;
    Ok(Json(state.assignment_repo.create(&req.into()).await?))
}

/// PUT /api/assignments/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
    Json(req): Json<AssignmentPayload>,
) -> Result<Json<DeliveryAssignment>, ApiError> {
    assignments::UPDATE.authorize(auth.principal())?;
    Ok(Json(state.assignment_repo.update(id, &req.into()).await?))
}

/// PUT /api/assignments/{id}/deliver
pub async fn deliver(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<DeliveryAssignment>, ApiError> {
    assignments::DELIVER.authorize(auth.principal())?;
    Ok(Json(state.assignment_repo.mark_delivered(id).await?))
}

/// DELETE /api/assignments/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    assignments::DELETE.authorize(auth.principal())?;

    state.assignment_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/assignments/{id}/lock
pub async fn lock(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<DeliveryAssignment>, ApiError> {
    assignments::LOCK.authorize(auth.principal())?;

    let assignment = state
        .assignment_repo
        .find_by_id_locked(id, state.lock_dwell())
        .await?;
    Ok(Json(assignment))
}
