//! Static endpoint policy table.
//!
//! One [`AccessRule`] per endpoint group, evaluated by the generic
//! evaluator in `comanda-auth`. Ownership-gated endpoints call
//! `authorize_owner` with the path parameter named in the comment.

use comanda_auth::policy::AccessRule;
use comanda_entity::user::Role;

const ADMIN: &[Role] = &[Role::Admin];
const ADMIN_OR_CLIENT: &[Role] = &[Role::Admin, Role::Cliente];
const ADMIN_OR_KITCHEN: &[Role] = &[Role::Admin, Role::PersonalCocina];
const ANY_ROLE: &[Role] = &[Role::Admin, Role::Cliente, Role::PersonalCocina];

/// `/api/clients`
pub mod clients {
    use super::*;

    pub const LIST: AccessRule = AccessRule::public();
    /// Ownership on `{id}`.
    pub const READ: AccessRule = AccessRule::any_of(ADMIN_OR_CLIENT);
    pub const CREATE: AccessRule = AccessRule::any_of(ADMIN);
    /// Ownership on `{id}`.
    pub const UPDATE: AccessRule = AccessRule::any_of(ADMIN_OR_CLIENT);
    pub const DELETE: AccessRule = AccessRule::any_of(ADMIN);
    pub const LOCK: AccessRule = AccessRule::any_of(ADMIN);
}

/// `/api/kitchen-staff`
pub mod kitchen_staff {
    use super::*;

    pub const LIST: AccessRule = AccessRule::any_of(ADMIN);
    /// Ownership on `{id}`.
    pub const READ: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const CREATE: AccessRule = AccessRule::any_of(ADMIN);
    /// Ownership on `{id}`.
    pub const UPDATE: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const DELETE: AccessRule = AccessRule::any_of(ADMIN);
    pub const LOCK: AccessRule = AccessRule::any_of(ADMIN);
}

/// `/api/couriers`
pub mod couriers {
    use super::*;

    pub const ALL: AccessRule = AccessRule::any_of(ADMIN);
}

/// `/api/categories`
pub mod categories {
    use super::*;

    pub const READ: AccessRule = AccessRule::public();
    pub const WRITE: AccessRule = AccessRule::any_of(ADMIN);
    pub const LOCK: AccessRule = AccessRule::any_of(ADMIN);
}

/// `/api/products`
pub mod products {
    use super::*;

    pub const READ: AccessRule = AccessRule::public();
    pub const WRITE: AccessRule = AccessRule::any_of(ADMIN);
    pub const LOCK: AccessRule = AccessRule::any_of(ADMIN);
}

/// `/api/orders`
pub mod orders {
    use super::*;

    pub const LIST: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const READ: AccessRule = AccessRule::any_of(ANY_ROLE);
    /// Ownership on `{client_id}`.
    pub const BY_CLIENT: AccessRule = AccessRule::any_of(ADMIN_OR_CLIENT);
    pub const BY_STATUS: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const TODAY: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const CREATE: AccessRule = AccessRule::any_of(ADMIN_OR_CLIENT);
    pub const UPDATE: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const UPDATE_STATUS: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const DELETE: AccessRule = AccessRule::any_of(ADMIN);
    pub const LOCK: AccessRule = AccessRule::any_of(ADMIN);
}

/// `/api/order-items`
pub mod order_items {
    use super::*;

    pub const LIST: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const READ: AccessRule = AccessRule::any_of(ANY_ROLE);
    pub const BY_ORDER: AccessRule = AccessRule::any_of(ANY_ROLE);
    pub const BY_PRODUCT: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const SPECIAL_INSTRUCTIONS: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const CREATE: AccessRule = AccessRule::any_of(ADMIN_OR_CLIENT);
    pub const UPDATE: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const DELETE: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
}

/// `/api/status-history`
pub mod status_history {
    use super::*;

    pub const LIST: AccessRule = AccessRule::any_of(ADMIN);
    pub const READ: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const BY_ORDER: AccessRule = AccessRule::any_of(ANY_ROLE);
    pub const BY_STATUS: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    /// Ownership on `{client_id}`.
    pub const BY_CLIENT: AccessRule = AccessRule::any_of(ADMIN_OR_CLIENT);
    pub const LATEST: AccessRule = AccessRule::any_of(ANY_ROLE);
    pub const CREATE: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const DELETE: AccessRule = AccessRule::any_of(ADMIN);
    pub const LOCK: AccessRule = AccessRule::any_of(ADMIN);
}

/// `/api/ratings`
pub mod ratings {
    use super::*;

    pub const LIST: AccessRule = AccessRule::public();
    pub const READ: AccessRule = AccessRule::public();
    pub const BY_ORDER: AccessRule = AccessRule::any_of(ADMIN_OR_CLIENT);
    /// Ownership on `{client_id}`.
    pub const BY_CLIENT: AccessRule = AccessRule::any_of(ADMIN_OR_CLIENT);
    pub const CREATE: AccessRule = AccessRule::any_of(ADMIN_OR_CLIENT);
    pub const UPDATE: AccessRule = AccessRule::any_of(ADMIN_OR_CLIENT);
    pub const DELETE: AccessRule = AccessRule::any_of(ADMIN);
    pub const AVERAGE: AccessRule = AccessRule::public();
    pub const LOCK: AccessRule = AccessRule::any_of(ADMIN);
}

/// `/api/assignments`
pub mod assignments {
    use super::*;

    pub const LIST: AccessRule = AccessRule::any_of(ADMIN);
    pub const READ: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const BY_ORDER: AccessRule = AccessRule::any_of(ANY_ROLE);
    pub const BY_COURIER: AccessRule = AccessRule::any_of(ADMIN);
    pub const PENDING: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const CREATE: AccessRule = AccessRule::any_of(ADMIN);
    pub const UPDATE: AccessRule = AccessRule::any_of(ADMIN);
    pub const DELIVER: AccessRule = AccessRule::any_of(ADMIN_OR_KITCHEN);
    pub const DELETE: AccessRule = AccessRule::any_of(ADMIN);
    pub const LOCK: AccessRule = AccessRule::any_of(ADMIN);
}
