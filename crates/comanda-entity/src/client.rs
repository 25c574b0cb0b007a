//! Client (customer) entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::person::PersonProfile;

/// A restaurant customer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    /// Unique client identifier.
    pub id: i64,
    /// Shared person fields.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: PersonProfile,
    /// Delivery address.
    pub address: String,
}

/// Data required to create or fully update a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClient {
    /// Shared person fields.
    #[serde(flatten)]
    pub profile: PersonProfile,
    /// Delivery address.
    pub address: String,
}
