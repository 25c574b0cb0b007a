//! Health probe.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    comanda_database::connection::health_check(&state.pool).await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
