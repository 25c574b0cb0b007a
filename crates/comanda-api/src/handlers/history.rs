//! Order status-history handlers.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use comanda_core::error::AppError;
use comanda_entity::history::StatusChange;
use comanda_entity::order::OrderStatus;

use crate::dto::request::StatusChangePayload;
use crate::error::ApiError;
use crate::extractors::Auth;
use crate::policy::status_history;
use crate::state::AppState;

/// GET /api/status-history
pub async fn list(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<StatusChange>>, ApiError> {
    status_history::LIST.authorize(auth.principal())?;
    Ok(Json(state.history_repo.find_all().await?))
}

/// GET /api/status-history/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<StatusChange>, ApiError> {
    status_history::READ.authorize(auth.principal())?;

    let entry = state
        .history_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Status change {id} not found")))?;
    Ok(Json(entry))
}

/// GET /api/status-history/order/{order_id}
pub async fn by_order(
    State(state): State<AppState>,
    auth: Auth,
    Path(order_id): Path<i64>,
) -> Result<Json<Vec<StatusChange>>, ApiError> {
    status_history::BY_ORDER.authorize(auth.principal())?;
    Ok(Json(state.history_repo.find_by_order(order_id).await?))
}

/// GET /api/status-history/status/{status}
pub async fn by_status(
    State(state): State<AppState>,
    auth: Auth,
    Path(status): Path<String>,
) -> Result<Json<Vec<StatusChange>>, ApiError> {
    status_history::BY_STATUS.authorize(auth.principal())?;

    let status = OrderStatus::from_str(&status)?;
    Ok(Json(state.history_repo.find_by_status(status).await?))
}

/// GET /api/status-history/client/{client_id}
pub async fn by_client(
    State(state): State<AppState>,
    auth: Auth,
    Path(client_id): Path<i64>,
) -> Result<Json<Vec<StatusChange>>, ApiError> {
    status_history::BY_CLIENT.authorize_owner(auth.principal(), client_id)?;
    Ok(Json(state.history_repo.find_by_client(client_id).await?))
}

/// GET /api/status-history/order/{order_id}/latest
pub async fn latest_for_order(
    State(state): State<AppState>,
    auth: Auth,
    Path(order_id): Path<i64>,
) -> Result<Json<StatusChange>, ApiError> {
    status_history::LATEST.authorize(auth.principal())?;

    let entry = state
        .history_repo
        .find_latest_for_order(order_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Order {order_id} has no status history"))
        })?;
    Ok(Json(entry))
}

/// POST /api/status-history
pub async fn create(
    State(state): State<AppState>,
    auth: Auth,
    Json(req): Json<StatusChangePayload>,
) -> Result<Json<StatusChange>, ApiError> {
    status_history::CREATE.authorize(auth.principal())?;
    Ok(Json(state.history_repo.create(&req.into()).await?))
}

/// DELETE /api/status-history/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    status_history::DELETE.authorize(auth.principal())?;

    state.history_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/status-history/{id}/lock
pub async fn lock(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<StatusChange>, ApiError> {
    status_history::LOCK.authorize(auth.principal())?;

    let entry = state
        .history_repo
        .find_by_id_locked(id, state.lock_dwell())
        .await?;
    Ok(Json(entry))
}
