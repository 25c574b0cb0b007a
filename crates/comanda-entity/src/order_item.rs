//! Order line-item entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One product line within an order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    /// Unique line-item identifier.
    pub id: i64,
    /// Owning order.
    pub order_id: i64,
    /// Ordered product.
    pub product_id: i64,
    /// Units ordered.
    pub quantity: i32,
    /// Price per unit at order time.
    pub unit_price: f64,
    /// Special preparation instructions, if any.
    pub special_instructions: Option<String>,
}

/// Data required to create or fully update a line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderItem {
    /// Owning order.
    pub order_id: i64,
    /// Ordered product.
    pub product_id: i64,
    /// Units ordered.
    pub quantity: i32,
    /// Price per unit at order time.
    pub unit_price: f64,
    /// Special preparation instructions, if any.
    pub special_instructions: Option<String>,
}
