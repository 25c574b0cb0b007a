//! Client handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use comanda_core::error::AppError;
use comanda_entity::client::Client;

use crate::dto::request::ClientPayload;
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::Auth;
use crate::policy::clients;
use crate::state::AppState;

/// GET /api/clients
pub async fn list(State(state): State<AppState>, auth: Auth) -> Result<Json<Vec<Client>>, ApiError> {
    clients::LIST.authorize(auth.principal())?;
    Ok(Json(state.client_repo.find_all().await?))
}

/// GET /api/clients/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Client>, ApiError> {
    clients::READ.authorize_owner(auth.principal(), id)?;

    let client = state
        .client_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Client {id} not found")))?;
    Ok(Json(client))
}

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    auth: Auth,
    Json(req): Json<ClientPayload>,
) -> Result<Json<Client>, ApiError> {
    clients::CREATE.authorize(auth.principal())?;
    validate_dto(&req)?;

    Ok(Json(state.client_repo.create(&req.into()).await?))
}

/// PUT /api/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
    Json(req): Json<ClientPayload>,
) -> Result<Json<Client>, ApiError> {
    clients::UPDATE.authorize_owner(auth.principal(), id)?;
    validate_dto(&req)?;

    Ok(Json(state.client_repo.update(id, &req.into()).await?))
}

/// DELETE /api/clients/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    clients::DELETE.authorize(auth.principal())?;

    state.client_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/clients/{id}/lock
pub async fn lock(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<i64>,
) -> Result<Json<Client>, ApiError> {
    clients::LOCK.authorize(auth.principal())?;

    let client = state
        .client_repo
        .find_by_id_locked(id, state.lock_dwell())
        .await?;
    Ok(Json(client))
}
