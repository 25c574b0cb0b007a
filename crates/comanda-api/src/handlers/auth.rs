//! Auth handlers — login, signup, session info, logout.

use axum::Json;
use axum::extract::State;

use comanda_service::account::Registration;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{LoginResponse, MessageResponse, SessionInfo, SessionResponse};
use crate::dto::validate_dto;
use crate::error::ApiError;
use crate::extractors::Auth;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    validate_dto(&req)?;

    let outcome = state
        .account_service
        .login(&req.username, &req.password)
        .await?;

    let account = outcome.account;
    let roles = account.authorities();

    Ok(Json(LoginResponse {
        token: outcome.token,
        token_type: "Bearer".to_string(),
        id: account.id,
        username: account.username,
        email: account.email,
        roles,
    }))
}

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_dto(&req)?;

    state
        .account_service
        .register(Registration {
            username: req.username,
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            roles: req.roles,
        })
        .await?;

    Ok(Json(MessageResponse::new("User registered successfully")))
}

/// GET /api/auth/session-info
pub async fn session_info(
    State(state): State<AppState>,
    auth: Auth,
) -> Result<Json<SessionInfo>, ApiError> {
    let Some(principal) = auth.principal() else {
        return Ok(Json(SessionInfo::Anonymous(MessageResponse::new(
            "No active session",
        ))));
    };

    let Some(account) = state.user_repo.find_by_username(&principal.username).await? else {
        return Ok(Json(SessionInfo::Anonymous(MessageResponse::new(
            "No active session",
        ))));
    };

    let roles = account.authorities();
    Ok(Json(SessionInfo::Active(SessionResponse {
        id: account.id,
        username: account.username,
        email: account.email,
        roles,
    })))
}

/// POST /api/auth/logout
///
/// Tokens are stateless and carry their own expiry, so there is nothing
/// to revoke server-side; the endpoint acknowledges and the client drops
/// its copy.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new("Session closed"))
}
