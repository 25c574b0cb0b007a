//! Order line-item handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use comanda_core::error::AppError;
use comanda_entity::order_item::OrderItem;

use crate::dto::request::OrderItemPayload;
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::Auth;
use crate::policy::order_items;
use crate::state::AppState;

/// GET /api/order-items
pub async fn list(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<OrderItem>>, ApiError> {
    order_items::LIST.authorize(auth.principal())?;
    Ok(Json(state.order_item_repo.find_all().await?))
}

/// GET /api/order-items/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<OrderItem>, ApiError> {
    order_items::READ.authorize(auth.principal())?;

    let item = state
        .order_item_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order item {id} not found")))?;
    Ok(Json(item))
}

/// GET /api/order-items/order/{order_id}
pub async fn by_order(
    State(state): State<AppState>,
    auth: Auth,
    Path(order_id): Path<i64>,
) -> Result<Json<Vec<OrderItem>>, ApiError> {
    order_items::BY_ORDER.authorize(auth.principal())?;
    Ok(Json(state.order_item_repo.find_by_order(order_id).await?))
}

/// GET /api/order-items/product/{product_id}
pub async fn by_product(
    State(state): State<AppState>,
    auth: Auth,
    Path(product_id): Path<i64>,
) -> Result<Json<Vec<OrderItem>>, ApiError> {
    order_items::BY_PRODUCT.authorize(auth.principal())?;
    Ok(Json(
        state.order_item_repo.find_by_product(product_id).await?,
    ))
}

/// GET /api/order-items/special-instructions
pub async fn with_special_instructions(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<OrderItem>>, ApiError> {
    order_items::SPECIAL_INSTRUCTIONS.authorize(auth.principal())?;
    Ok(Json(
        state.order_item_repo.find_with_special_instructions().await?,
    ))
}

/// POST /api/order-items
pub async fn create(
    State(state): State<AppState>,
    auth: Auth,
    Json(req): Json<OrderItemPayload>,
) -> Result<Json<OrderItem>, ApiError> {
    order_items::CREATE.authorize(auth.principal())?;
    validate_dto(&req)?;

    Ok(Json(state.order_item_repo.create(&req.into()).await?))
}

/// PUT /api/order-items/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
    Json(req): Json<OrderItemPayload>,
) -> Result<Json<OrderItem>, ApiError> {
    order_items::UPDATE.authorize(auth.principal())?;
    validate_dto(&req)?;

    Ok(Json(state.order_item_repo.update(id, &req.into()).await?))
}

/// DELETE /api/order-items/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    order_items::DELETE.authorize(auth.principal())?;

    state.order_item_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/order-items/order/{order_id}
pub async fn delete_by_order(
    State(state): State<AppState>,
    auth: Auth,
    Path(order_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    order_items::DELETE.authorize(auth.principal())?;

    state.order_item_repo.delete_by_order(order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
