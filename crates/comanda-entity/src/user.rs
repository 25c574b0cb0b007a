//! Credential-store user account and role enumeration.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Prefix role names carry in the database (`ROL_ADMIN`, ...).
const ROLE_DOMAIN_PREFIX: &str = "ROL_";

/// Prefix used by authority strings handed to the policy evaluator.
const ROLE_AUTHORITY_PREFIX: &str = "ROLE_";

/// Roles available in the authorization system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "role_name")]
pub enum Role {
    /// Full system administrator.
    #[sqlx(rename = "ROL_ADMIN")]
    #[serde(rename = "ROL_ADMIN")]
    Admin,
    /// Restaurant customer.
    #[sqlx(rename = "ROL_CLIENTE")]
    #[serde(rename = "ROL_CLIENTE")]
    Cliente,
    /// Kitchen staff member.
    #[sqlx(rename = "ROL_PERSONAL_COCINA")]
    #[serde(rename = "ROL_PERSONAL_COCINA")]
    PersonalCocina,
}

impl Role {
    /// Return the role's domain name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ROL_ADMIN",
            Self::Cliente => "ROL_CLIENTE",
            Self::PersonalCocina => "ROL_PERSONAL_COCINA",
        }
    }

    /// Return the authority string for this role.
    ///
    /// This is the single place where the `ROL_` domain prefix is
    /// rewritten to the `ROLE_` authority prefix; no other code performs
    /// that substitution.
    pub fn authority(&self) -> String {
        self.as_str()
            .replacen(ROLE_DOMAIN_PREFIX, ROLE_AUTHORITY_PREFIX, 1)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = comanda_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ROL_ADMIN" => Ok(Self::Admin),
            "ROL_CLIENTE" => Ok(Self::Cliente),
            "ROL_PERSONAL_COCINA" => Ok(Self::PersonalCocina),
            _ => Err(comanda_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: ROL_ADMIN, ROL_CLIENTE, ROL_PERSONAL_COCINA"
            ))),
        }
    }
}

/// A credential-store account.
///
/// Accounts are what authenticate; the person-like resources (clients,
/// kitchen staff, couriers) are separate business records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserAccount {
    /// Unique account identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Inactive accounts can never authenticate.
    pub active: bool,
    /// Assigned roles.
    pub roles: Vec<Role>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Authority strings for all assigned roles.
    pub fn authorities(&self) -> Vec<String> {
        self.roles.iter().map(Role::authority).collect()
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserAccount {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Assigned roles.
    pub roles: Vec<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_normalization() {
        assert_eq!(Role::Admin.authority(), "ROLE_ADMIN");
        assert_eq!(Role::Cliente.authority(), "ROLE_CLIENTE");
        assert_eq!(Role::PersonalCocina.authority(), "ROLE_PERSONAL_COCINA");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ROL_ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("rol_cliente".parse::<Role>().unwrap(), Role::Cliente);
        assert!("ROLE_ADMIN".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }
}
