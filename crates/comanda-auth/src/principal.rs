//! Authenticated principal and the loader that reconstructs it per request.

use std::collections::HashSet;
use std::sync::Arc;

use comanda_core::error::AppError;
use comanda_core::result::AppResult;
use comanda_database::repositories::user::UserRepository;
use comanda_entity::user::{Role, UserAccount};

/// The authenticated identity bound to a single request.
///
/// Rebuilt from the credential store on every request and dropped at
/// request end; never persisted and never shared across requests.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    /// Credential row id.
    pub id: i64,
    /// The subject the token was issued for.
    pub username: String,
    /// Granted authority strings (`ROLE_*`).
    pub authorities: HashSet<String>,
}

impl AuthenticatedPrincipal {
    /// Builds a principal from a credential row.
    pub fn from_account(account: &UserAccount) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            authorities: account.roles.iter().map(Role::authority).collect(),
        }
    }

    /// Whether the principal holds the given authority.
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }

    /// Whether the principal holds the administrative role.
    pub fn is_admin(&self) -> bool {
        self.authorities.contains(&Role::Admin.authority())
    }
}

/// Resolves a verified token subject into an [`AuthenticatedPrincipal`].
#[derive(Debug, Clone)]
pub struct PrincipalLoader {
    users: Arc<UserRepository>,
}

impl PrincipalLoader {
    /// Creates a new principal loader over the credential store.
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    /// Loads the principal for a subject.
    ///
    /// A missing credential yields `NotFound` and an inactive one yields
    /// `Unauthenticated`; the authentication gate treats both the same
    /// way, so neither ever reaches a client as a server error.
    pub async fn load(&self, username: &str) -> AppResult<AuthenticatedPrincipal> {
        let account = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No account for subject '{username}'")))?;

        if !account.active {
            return Err(AppError::unauthenticated("Account is inactive"));
        }

        Ok(AuthenticatedPrincipal::from_account(&account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn account(roles: Vec<Role>) -> UserAccount {
        UserAccount {
            id: 42,
            username: "maria".to_string(),
            email: "maria@example.com".to_string(),
            password_hash: String::new(),
            first_name: "Maria".to_string(),
            last_name: "Lopez".to_string(),
            active: true,
            roles,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_authorities_are_normalized() {
        let principal =
            AuthenticatedPrincipal::from_account(&account(vec![Role::Cliente, Role::Admin]));

        assert!(principal.has_authority("ROLE_CLIENTE"));
        assert!(principal.has_authority("ROLE_ADMIN"));
        assert!(!principal.has_authority("ROL_CLIENTE"));
        assert!(principal.is_admin());
    }

    #[test]
    fn test_non_admin() {
        let principal = AuthenticatedPrincipal::from_account(&account(vec![Role::Cliente]));
        assert!(!principal.is_admin());
    }
}
