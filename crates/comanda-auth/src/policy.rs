//! Declarative per-endpoint authorization rules and their evaluator.
//!
//! Each endpoint binds one static [`AccessRule`]; a single evaluator
//! decides allow/deny from the rule and the request's (possibly absent)
//! principal. Ownership-gated endpoints additionally pass the owner id
//! taken from the request path.

use comanda_core::error::AppError;
use comanda_core::result::AppResult;
use comanda_entity::user::Role;

use crate::principal::AuthenticatedPrincipal;

/// A static authorization rule bound to an endpoint.
///
/// `roles` has OR semantics: holding any listed role satisfies the role
/// check. Ownership never widens access on its own — it only lets a
/// role-holding principal reach its own resource, while an administrator
/// passes regardless of ownership.
#[derive(Debug, Clone, Copy)]
pub struct AccessRule {
    public: bool,
    roles: &'static [Role],
}

impl AccessRule {
    /// A rule that permits anonymous access.
    pub const fn public() -> Self {
        Self {
            public: true,
            roles: &[],
        }
    }

    /// A rule satisfied by any of the given roles.
    pub const fn any_of(roles: &'static [Role]) -> Self {
        Self {
            public: false,
            roles,
        }
    }

    /// Evaluates the rule without an ownership check.
    pub fn authorize(&self, principal: Option<&AuthenticatedPrincipal>) -> AppResult<()> {
        if self.public {
            return Ok(());
        }

        let principal = require_principal(principal)?;

        if self.role_match(principal) {
            Ok(())
        } else {
            Err(AppError::forbidden("Access denied"))
        }
    }

    /// Evaluates the rule with an ownership check against `owner_id`.
    ///
    /// An administrator always passes. Anyone else needs both a matching
    /// role and ownership of the target resource.
    pub fn authorize_owner(
        &self,
        principal: Option<&AuthenticatedPrincipal>,
        owner_id: i64,
    ) -> AppResult<()> {
        if self.public {
            return Ok(());
        }

        let principal = require_principal(principal)?;

        if principal.is_admin() {
            return Ok(());
        }

        if self.role_match(principal) && principal.id == owner_id {
            Ok(())
        } else {
            Err(AppError::forbidden("Access denied"))
        }
    }

    fn role_match(&self, principal: &AuthenticatedPrincipal) -> bool {
        self.roles
            .iter()
            .any(|role| principal.has_authority(&role.authority()))
    }
}

fn require_principal<'p>(
    principal: Option<&'p AuthenticatedPrincipal>,
) -> AppResult<&'p AuthenticatedPrincipal> {
    principal.ok_or_else(|| AppError::unauthenticated("Authentication required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_core::error::ErrorKind;
    use std::collections::HashSet;

    fn principal(id: i64, roles: &[Role]) -> AuthenticatedPrincipal {
        AuthenticatedPrincipal {
            id,
            username: format!("user{id}"),
            authorities: roles.iter().map(Role::authority).collect::<HashSet<_>>(),
        }
    }

    const ADMIN_ONLY: AccessRule = AccessRule::any_of(&[Role::Admin]);
    const CLIENT_OR_ADMIN: AccessRule = AccessRule::any_of(&[Role::Admin, Role::Cliente]);
    const OPEN: AccessRule = AccessRule::public();

    #[test]
    fn test_public_allows_anonymous() {
        assert!(OPEN.authorize(None).is_ok());
        assert!(OPEN.authorize_owner(None, 99).is_ok());
    }

    #[test]
    fn test_missing_principal_is_unauthenticated() {
        let err = ADMIN_ONLY.authorize(None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_admin_only_rule() {
        let admin = principal(1, &[Role::Admin]);
        let client = principal(2, &[Role::Cliente]);

        assert!(ADMIN_ONLY.authorize(Some(&admin)).is_ok());
        let err = ADMIN_ONLY.authorize(Some(&client)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_any_of_is_or_semantics() {
        let kitchen = principal(3, &[Role::PersonalCocina]);
        let rule = AccessRule::any_of(&[Role::Admin, Role::PersonalCocina]);

        assert!(rule.authorize(Some(&kitchen)).is_ok());
    }

    #[test]
    fn test_owner_allowed_on_own_resource() {
        let client = principal(42, &[Role::Cliente]);
        assert!(CLIENT_OR_ADMIN.authorize_owner(Some(&client), 42).is_ok());
    }

    #[test]
    fn test_non_owner_denied_without_admin() {
        let client = principal(42, &[Role::Cliente]);
        let err = CLIENT_OR_ADMIN
            .authorize_owner(Some(&client), 99)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_admin_ignores_ownership() {
        let admin = principal(1, &[Role::Admin]);
        assert!(CLIENT_OR_ADMIN.authorize_owner(Some(&admin), 99).is_ok());
    }

    #[test]
    fn test_ownership_alone_does_not_bypass_roles() {
        // Holds no qualifying role; owning the resource must not help.
        let kitchen = principal(42, &[Role::PersonalCocina]);
        let err = CLIENT_OR_ADMIN
            .authorize_owner(Some(&kitchen), 42)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
