//! Menu category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::status::CatalogStatus;

/// A menu category grouping products.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: i64,
    /// Category name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: CatalogStatus,
}

/// Data required to create or fully update a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    /// Category name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}
