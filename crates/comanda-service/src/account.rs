//! Account flows — login, registration, and the default-admin bootstrap.

use std::sync::Arc;

use tracing::{info, warn};

use comanda_auth::jwt::TokenCodec;
use comanda_auth::password::PasswordHasher;
use comanda_core::error::AppError;
use comanda_core::result::AppResult;
use comanda_database::repositories::user::UserRepository;
use comanda_entity::user::{NewUserAccount, Role, UserAccount};

/// Username of the bootstrapped administrator account.
const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The signed token.
    pub token: String,
    /// The authenticated account.
    pub account: UserAccount,
}

/// Registration input after DTO validation.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password (hashed here).
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Requested role names; `None` grants the base client role.
    pub roles: Option<Vec<String>>,
}

/// Handles credential verification, token issuance, and registration.
#[derive(Debug, Clone)]
pub struct AccountService {
    users: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    codec: Arc<TokenCodec>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        codec: Arc<TokenCodec>,
    ) -> Self {
        Self {
            users,
            hasher,
            codec,
        }
    }

    /// Verifies credentials and issues a token.
    ///
    /// Every failure path — unknown username, inactive account, wrong
    /// password — produces the same unauthenticated error so callers
    /// cannot probe which part was wrong.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let denied = || AppError::unauthenticated("Invalid username or password");

        let account = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(denied)?;

        if !account.active {
            warn!(username, "Login attempt on inactive account");
            return Err(denied());
        }

        if !self
            .hasher
            .verify_password(password, &account.password_hash)?
        {
            return Err(denied());
        }

        let token = self.codec.issue(&account.username)?;

        info!(username = %account.username, "Login succeeded");
        Ok(LoginOutcome { token, account })
    }

    /// Registers a new account.
    ///
    /// Duplicate usernames and emails are rejected before any write, so a
    /// failed registration never mutates the credential store.
    pub async fn register(&self, data: Registration) -> AppResult<UserAccount> {
        if self.users.exists_by_username(&data.username).await? {
            return Err(AppError::conflict(format!(
                "Username '{}' already in use",
                data.username
            )));
        }

        if self.users.exists_by_email(&data.email).await? {
            return Err(AppError::conflict("Email already in use"));
        }

        let roles = resolve_roles(data.roles.as_deref());
        let password_hash = self.hasher.hash_password(&data.password)?;

        let account = self
            .users
            .create(&NewUserAccount {
                username: data.username,
                email: data.email,
                password_hash,
                first_name: data.first_name,
                last_name: data.last_name,
                roles,
            })
            .await?;

        info!(username = %account.username, roles = ?account.roles, "Account registered");
        Ok(account)
    }

    /// Creates the default administrator account when none exists yet.
    pub async fn ensure_default_admin(&self) -> AppResult<()> {
        if self.users.exists_by_username(DEFAULT_ADMIN_USERNAME).await? {
            return Ok(());
        }

        let password_hash = self.hasher.hash_password("admin123")?;
        self.users
            .create(&NewUserAccount {
                username: DEFAULT_ADMIN_USERNAME.to_string(),
                email: "admin@comanda.local".to_string(),
                password_hash,
                first_name: "Administrador".to_string(),
                last_name: "Sistema".to_string(),
                roles: vec![Role::Admin],
            })
            .await?;

        warn!("Default administrator account created — change its password");
        Ok(())
    }
}

/// Maps requested role names to [`Role`]s.
///
/// Unknown names fall back to the base client role, and no roles at all
/// grants exactly that base role.
fn resolve_roles(requested: Option<&[String]>) -> Vec<Role> {
    let Some(names) = requested else {
        return vec![Role::Cliente];
    };

    let mut roles: Vec<Role> = Vec::new();
    for name in names {
        let role = match name.to_lowercase().as_str() {
            "admin" => Role::Admin,
            "personal_cocina" => Role::PersonalCocina,
            _ => Role::Cliente,
        };
        if !roles.contains(&role) {
            roles.push(role);
        }
    }

    if roles.is_empty() {
        return vec![Role::Cliente];
    }

    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_roles_defaults_to_client() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(resolve_roles(None), vec![Role::Cliente]);
        assert_eq!(resolve_roles(Some(&empty)), vec![Role::Cliente]);
    }

    #[test]
    fn test_resolve_roles_known_names() {
        let roles = resolve_roles(Some(&[
            "admin".to_string(),
            "personal_cocina".to_string(),
        ]));
        assert!(roles.contains(&Role::Admin));
        assert!(roles.contains(&Role::PersonalCocina));
    }

    #[test]
    fn test_resolve_roles_unknown_falls_back_to_client() {
        assert_eq!(
            resolve_roles(Some(&["superuser".to_string()])),
            vec![Role::Cliente]
        );
    }

    #[test]
    fn test_resolve_roles_deduplicates() {
        let roles = resolve_roles(Some(&["admin".to_string(), "admin".to_string()]));
        assert_eq!(roles, vec![Role::Admin]);
    }
}
