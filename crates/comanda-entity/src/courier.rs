//! Courier entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::person::PersonProfile;

/// A delivery courier.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Courier {
    /// Unique courier identifier.
    pub id: i64,
    /// Shared person fields.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: PersonProfile,
    /// Delivery zone the courier covers.
    pub zone: String,
}

/// Data required to create or fully update a courier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourier {
    /// Shared person fields.
    #[serde(flatten)]
    pub profile: PersonProfile,
    /// Delivery zone the courier covers.
    pub zone: String,
}
