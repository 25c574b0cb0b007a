//! Order status-change history entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::order::OrderStatus;

/// One recorded status transition of an order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatusChange {
    /// Unique history-entry identifier.
    pub id: i64,
    /// Order whose status changed.
    pub order_id: i64,
    /// Status the order entered.
    pub status: OrderStatus,
    /// When the change happened.
    pub changed_at: DateTime<Utc>,
    /// Client associated with the change, if any.
    pub client_id: Option<i64>,
    /// Kitchen staff member who made the change, if any.
    pub kitchen_staff_id: Option<i64>,
}

/// Data required to record a status change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStatusChange {
    /// Order whose status changed.
    pub order_id: i64,
    /// Status the order entered.
    pub status: OrderStatus,
    /// Client associated with the change, if any.
    pub client_id: Option<i64>,
    /// Kitchen staff member who made the change, if any.
    pub kitchen_staff_id: Option<i64>,
}
