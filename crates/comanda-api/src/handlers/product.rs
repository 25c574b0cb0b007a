//! Menu product handlers. Reads are public; writes are admin-only.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use comanda_entity::product::Product;

use crate::dto::request::{NameQuery, ProductPayload};
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::Auth;
use crate::policy::products;
use crate::state::AppState;

/// GET /api/products
pub async fn list(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<Product>>, ApiError> {
    products::READ.authorize(auth.principal())?;
    Ok(Json(state.catalog.list_products().await?))
}

/// GET /api/products/active
pub async fn list_active(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<Product>>, ApiError> {
    products::READ.authorize(auth.principal())?;
    Ok(Json(state.catalog.active_products().await?))
}

/// GET /api/products/featured
pub async fn list_featured(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<Product>>, ApiError> {
    products::READ.authorize(auth.principal())?;
    Ok(Json(state.catalog.featured_products().await?))
}

/// GET /api/products/category/{id}
pub async fn by_category(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Product>>, ApiError> {
    products::READ.authorize(auth.principal())?;
    Ok(Json(state.catalog.products_by_category(id).await?))
}

/// GET /api/products/search?name=
pub async fn search(
    State(state): State<AppState>,
    auth: Auth,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    products::READ.authorize(auth.principal())?;
    Ok(Json(state.catalog.search_products(&query.name).await?))
}

/// GET /api/products/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    products::READ.authorize(auth.principal())?;
    Ok(Json(state.catalog.get_product(id).await?))
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    auth: Auth,
    Json(req): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    products::WRITE.authorize(auth.principal())?;
    validate_dto(&req)?;

    Ok(Json(state.catalog.create_product(&req.into()).await?))
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
    Json(req): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    products::WRITE.authorize(auth.principal())?;
    validate_dto(&req)?;

    Ok(Json(state.catalog.update_product(id, &req.into()).await?))
}

/// PUT /api/products/{id}/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    products::WRITE.authorize(auth.principal())?;
    Ok(Json(state.catalog.deactivate_product(id).await?))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    products::WRITE.authorize(auth.principal())?;

    state.catalog.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/products/{id}/lock
pub async fn lock(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    products::LOCK.authorize(auth.principal())?;

    let product = state
        .product_repo
        .find_by_id_locked(id, state.lock_dwell())
        .await?;
    Ok(Json(product))
}
