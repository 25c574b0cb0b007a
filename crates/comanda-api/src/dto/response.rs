//! Response DTOs.
//!
//! CRUD endpoints serialize the entity structs directly; the DTOs here
//! cover the auth contract and small wrapper shapes.

use serde::{Deserialize, Serialize};

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The signed bearer token.
    pub token: String,
    /// Always `"Bearer"`.
    pub token_type: String,
    /// Credential row id.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Granted authority strings (`ROLE_*`).
    pub roles: Vec<String>,
}

/// Identity echo for an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Credential row id.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Granted authority strings (`ROLE_*`).
    pub roles: Vec<String>,
}

/// Simple message envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Builds a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Either an identity echo or a "no session" message.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SessionInfo {
    /// An authenticated principal is bound to the request.
    Active(SessionResponse),
    /// No (valid) credential was presented.
    Anonymous(MessageResponse),
}

/// Average-score response for rating aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageResponse {
    /// The average score; 0.0 when nothing was rated.
    pub average: f64,
}

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when the database responds.
    pub status: String,
}
