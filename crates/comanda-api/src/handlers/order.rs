//! Order handlers.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use comanda_core::error::AppError;
use comanda_entity::order::{Order, OrderStatus};

use crate::dto::request::{CreateOrderRequest, UpdateOrderRequest};
use crate::error::ApiError;
use crate::extractors::Auth;
use crate::policy::orders;
use crate::state::AppState;

/// GET /api/orders
pub async fn list(State(state): State<AppState>, auth: Auth) -> Result<Json<Vec<Order>>, ApiError> {
    orders::LIST.authorize(auth.principal())?;
    Ok(Json(state.order_repo.find_all().await?))
}

/// GET /api/orders/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Order>, ApiError> {
    orders::READ.authorize(auth.principal())?;

    let order = state
        .order_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
    Ok(Json(order))
}

/// GET /api/orders/client/{client_id}
pub async fn by_client(
    State(state): State<AppState>,
    auth: Auth,
    Path(client_id): Path<i64>,
) -> Result<Json<Vec<Order>>, ApiError> {
    orders::BY_CLIENT.authorize_owner(auth.principal(), client_id)?;
    Ok(Json(state.order_repo.find_by_client(client_id).await?))
}

/// GET /api/orders/status/{status}
pub async fn by_status(
    State(state): State<AppState>,
    auth: Auth,
    Path(status): Path<String>,
) -> Result<Json<Vec<Order>>, ApiError> {
    orders::BY_STATUS.authorize(auth.principal())?;

    let status = OrderStatus::from_str(&status)?;
    Ok(Json(state.order_repo.find_by_status(status).await?))
}

/// GET /api/orders/today
pub async fn today(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<Order>>, ApiError> {
    orders::TODAY.authorize(auth.principal())?;
    Ok(Json(state.order_repo.find_today().await?))
}

/// POST /api/orders
pub async fn create(
    State(state): State<AppState>,
    auth: Auth,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<Order>, ApiError> {
    orders::CREATE.authorize(auth.principal())?;
    Ok(Json(state.order_repo.create(req.client_id).await?))
}

/// PUT /api/orders/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
    Json(req): Json<UpdateOrderRequest>,
) -> Result<Json<Order>, ApiError> {
    orders::UPDATE.authorize(auth.principal())?;
    Ok(Json(state.order_repo.update(id, &req.into()).await?))
}

/// PUT /api/orders/{id}/status/{status}
pub async fn update_status(
    State(state): State<AppState>,
    auth: Auth,
    Path((id, status)): Path<(i64, String)>,
) -> Result<Json<Order>, ApiError> {
    orders::UPDATE_STATUS.authorize(auth.principal())?;

    let status = OrderStatus::from_str(&status)?;
    Ok(Json(state.order_repo.update_status(id, status).await?))
}

/// DELETE /api/orders/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    orders::DELETE.authorize(auth.principal())?;

    state.order_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/orders/{id}/lock
pub async fn lock(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Order>, ApiError> {
    orders::LOCK.authorize(auth.principal())?;

    let order = state
        .order_repo
        .find_by_id_locked(id, state.lock_dwell())
        .await?;
    Ok(Json(order))
}
