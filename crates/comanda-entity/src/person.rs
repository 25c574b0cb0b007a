//! Shared person fields composed into client, kitchen-staff, and courier rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Personal contact fields shared by every person-like resource.
///
/// Composed (flattened) into each owning record rather than modeled as a
/// parent table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonProfile {
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Date the person was registered.
    pub registered_on: NaiveDate,
}
