//! Rating handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use comanda_core::error::AppError;
use comanda_entity::rating::Rating;

use crate::dto::request::RatingPayload;
use crate::dto::response::AverageResponse;
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::Auth;
use crate::policy::ratings;
use crate::state::AppState;

/// GET /api/ratings
pub async fn list(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<Vec<Rating>>, ApiError> {
    ratings::LIST.authorize(auth.principal())?;
    Ok(Json(state.rating_repo.find_all().await?))
}

/// GET /api/ratings/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Rating>, ApiError> {
    ratings::READ.authorize(auth.principal())?;

    let rating = state
        .rating_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Rating {id} not found")))?;
    Ok(Json(rating))
}

/// GET /api/ratings/order/{order_id}
pub async fn by_order(
    State(state): State<AppState>,
    auth: Auth,
    Path(order_id): Path<i64>,
) -> Result<Json<Vec<Rating>>, ApiError> {
    ratings::BY_ORDER.authorize(auth.principal())?;
    Ok(Json(state.rating_repo.find_by_order(order_id).await?))
}

/// GET /api/ratings/client/{client_id}
pub async fn by_client(
    State(state): State<AppState>,
    auth: Auth,
    Path(client_id): Path<i64>,
) -> Result<Json<Vec<Rating>>, ApiError> {
    ratings::BY_CLIENT.authorize_owner(auth.principal(), client_id)?;
    Ok(Json(state.rating_repo.find_by_client(client_id).await?))
}

/// GET /api/ratings/average/order/{order_id}
pub async fn average_for_order(
    State(state): State<AppState>,
    auth: Auth,
    Path(order_id): Path<i64>,
) -> Result<Json<AverageResponse>, ApiError> {
    ratings::AVERAGE.authorize(auth.principal())?;

    let average = state.rating_repo.average_for_order(order_id).await?;
    Ok(Json(AverageResponse { average }))
}

/// GET /api/ratings/average/client/{client_id}
pub async fn average_for_client(
    State(state): State<AppState>,
    auth: Auth,
    Path(client_id): Path<i64>,
) -> Result<Json<AverageResponse>, ApiError> {
    ratings::AVERAGE.authorize(auth.principal())?;

    let average = state.rating_repo.average_for_client(client_id).await?;
    Ok(Json(AverageResponse { average }))
}

/// POST /api/ratings
pub async fn create(
    State(state): State<AppState>,
    auth: Auth,
    Json(req): Json<RatingPayload>,
) -> Result<Json<Rating>, ApiError> {
    ratings::CREATE.authorize(auth.principal())?;
    validate_dto(&req)?;

    Ok(Json(state.rating_repo.create(&req.into()).await?))
}

/// PUT /api/ratings/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
    Json(req): Json<RatingPayload>,
) -> Result<Json<Rating>, ApiError> {
    ratings::UPDATE.authorize(auth.principal())?;
    validate_dto(&req)?;

    Ok(Json(state.rating_repo.update(id, &req.into()).await?))
}

/// DELETE /api/ratings/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    ratings::DELETE.authorize(auth.principal())?;

    state.rating_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/ratings/{id}/lock
pub async fn lock(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Rating>, ApiError> {
    ratings::LOCK.authorize(auth.principal())?;

    let rating = state
        .rating_repo
        .find_by_id_locked(id, state.lock_dwell())
        .await?;
    Ok(Json(rating))
}
