//! The authentication gate — an extractor that never rejects.
//!
//! Pulls the bearer token from the `Authorization` header, verifies it,
//! and resolves the principal. Every failure path (missing header, bad
//! signature, expired token, unknown or inactive subject) is logged and
//! degrades to an anonymous context; the actual deny decision is made by
//! the policy evaluator, which keeps the error surface uniform and avoids
//! a credential-probing oracle.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use comanda_auth::principal::AuthenticatedPrincipal;

use crate::state::AppState;

/// The (possibly anonymous) authentication context of a request.
#[derive(Debug, Clone)]
pub struct Auth(pub Option<AuthenticatedPrincipal>);

impl Auth {
    /// The bound principal, if the request authenticated successfully.
    pub fn principal(&self) -> Option<&AuthenticatedPrincipal> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for Auth {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Auth(authenticate(parts, state).await))
    }
}

/// Runs the token → principal pipeline, returning `None` on any failure.
async fn authenticate(parts: &Parts, state: &AppState) -> Option<AuthenticatedPrincipal> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;

    let claims = match state.token_codec.verify(token) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(error = %e, "Token verification failed");
            return None;
        }
    };

    match state.principal_loader.load(&claims.sub).await {
        Ok(principal) => Some(principal),
        Err(e) => {
            debug!(subject = %claims.sub, error = %e, "Token subject could not be resolved");
            None
        }
    }
}
