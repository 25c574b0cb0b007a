//! # comanda-auth
//!
//! Stateless authentication and authorization primitives: the JWT token
//! codec, Argon2id password hashing, the principal loader, and the
//! role/ownership policy evaluator.

pub mod jwt;
pub mod password;
pub mod policy;
pub mod principal;

pub use jwt::{Claims, TokenCodec, TokenError};
pub use password::PasswordHasher;
pub use policy::AccessRule;
pub use principal::{AuthenticatedPrincipal, PrincipalLoader};
