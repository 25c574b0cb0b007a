//! Kitchen staff entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::person::PersonProfile;

/// A kitchen staff member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct KitchenStaff {
    /// Unique staff identifier.
    pub id: i64,
    /// Shared person fields.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: PersonProfile,
    /// Work shift (e.g. "morning", "evening").
    pub shift: String,
    /// Kitchen area assignment.
    pub area: String,
}

/// Data required to create or fully update a kitchen staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewKitchenStaff {
    /// Shared person fields.
    #[serde(flatten)]
    pub profile: PersonProfile,
    /// Work shift.
    pub shift: String,
    /// Kitchen area assignment.
    pub area: String,
}
