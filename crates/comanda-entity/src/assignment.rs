//! Courier delivery-assignment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Assignment of an order to a courier.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeliveryAssignment {
    /// Unique assignment identifier.
    pub id: i64,
    /// Assigned order.
    pub order_id: i64,
    /// Courier carrying the order.
    pub courier_id: i64,
    /// When the assignment was made.
    pub assigned_at: DateTime<Utc>,
    /// When the order was delivered; `None` while pending.
    pub delivered_at: Option<DateTime<Utc>>,
}

impl DeliveryAssignment {
    /// Whether the delivery is still pending.
    pub fn is_pending(&self) -> bool {
        self.delivered_at.is_none()
    }
}

/// Data required to create or reassign a delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssignment {
    /// Assigned order.
    pub order_id: i64,
    /// Courier carrying the order.
    pub courier_id: i64,
}
