//! Menu product entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::status::CatalogStatus;

/// A menu product.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier.
    pub id: i64,
    /// Owning category.
    pub category_id: i64,
    /// Product name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Optional image URL.
    pub image_url: Option<String>,
    /// Preparation time in minutes.
    pub prep_minutes: Option<i32>,
    /// Free-form ingredient list.
    pub ingredients: Option<String>,
    /// Lifecycle status.
    pub status: CatalogStatus,
    /// Whether the product is featured on the menu.
    pub featured: bool,
}

/// Data required to create or fully update a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    /// Owning category.
    pub category_id: i64,
    /// Product name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Optional image URL.
    pub image_url: Option<String>,
    /// Preparation time in minutes.
    pub prep_minutes: Option<i32>,
    /// Free-form ingredient list.
    pub ingredients: Option<String>,
    /// Whether the product is featured on the menu.
    pub featured: bool,
}
