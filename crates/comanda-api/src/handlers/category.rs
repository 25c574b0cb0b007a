//! Menu category handlers. Reads are public; writes are admin-only.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use comanda_entity::category::Category;

use crate::dto::request::{CategoryPayload, NameQuery};
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::Auth;
use crate::policy::categories;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<Category>>, ApiError> {
    categories::READ.authorize(auth.principal())?;
    Ok(Json(state.catalog.list_categories().await?))
}

/// GET /api/categories/active
pub async fn list_active(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<Category>>, ApiError> {
    categories::READ.authorize(auth.principal())?;
    Ok(Json(state.catalog.active_categories().await?))
}

/// GET /api/categories/search?name=
pub async fn search(
    State(state): State<AppState>,
    auth: Auth,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<Category>>, ApiError> {
    categories::READ.authorize(auth.principal())?;
    Ok(Json(state.catalog.search_categories(&query.name).await?))
}

/// GET /api/categories/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Category>, ApiError> {
    categories::READ.authorize(auth.principal())?;
    Ok(Json(state.catalog.get_category(id).await?))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    auth: Auth,
    Json(req): Json<CategoryPayload>,
) -> Result<Json<Category>, ApiError> {
    categories::WRITE.authorize(auth.principal())?;
    validate_dto(&req)?;

    Ok(Json(state.catalog.create_category(&req.into()).await?))
}

/// PUT /api/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
    Json(req): Json<CategoryPayload>,
) -> Result<Json<Category>, ApiError> {
    categories::WRITE.authorize(auth.principal())?;
    validate_dto(&req)?;

    Ok(Json(state.catalog.update_category(id, &req.into()).await?))
}

/// PUT /api/categories/{id}/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Category>, ApiError> {
    categories::WRITE.authorize(auth.principal())?;
    Ok(Json(state.catalog.deactivate_category(id).await?))
}

/// DELETE /api/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    categories::WRITE.authorize(auth.principal())?;

    state.catalog.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/categories/{id}/lock
pub async fn lock(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Category>, ApiError> {
    categories::LOCK.authorize(auth.principal())?;

    let category = state
        .category_repo
        .find_by_id_locked(id, state.lock_dwell())
        .await?;
    Ok(Json(category))
}
