//! Order rating entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client's rating of an order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rating {
    /// Unique rating identifier.
    pub id: i64,
    /// Rated order.
    pub order_id: i64,
    /// Client who rated.
    pub client_id: i64,
    /// Score from 1 to 5.
    pub score: i32,
    /// Optional free-form comment.
    pub comment: Option<String>,
    /// Last modification time.
    pub modified_at: DateTime<Utc>,
}

/// Data required to create or fully update a rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRating {
    /// Rated order.
    pub order_id: i64,
    /// Client who rated.
    pub client_id: i64,
    /// Score from 1 to 5.
    pub score: i32,
    /// Optional free-form comment.
    pub comment: Option<String>,
}
