//! Order status-change history repository.

use std::time::Duration;

use sqlx::PgPool;

use comanda_core::error::{AppError, ErrorKind};
use comanda_core::result::AppResult;
use comanda_entity::history::{NewStatusChange, StatusChange};
use comanda_entity::order::OrderStatus;

use crate::locking;

const SELECT_FOR_UPDATE: &str = "SELECT * FROM order_status_history WHERE id = $1 FOR UPDATE";

/// Repository for the order status-change log.
#[derive(Debug, Clone)]
pub struct StatusHistoryRepository {
    pool: PgPool,
}

impl StatusHistoryRepository {
    /// Create a new status-history repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all history entries.
    pub async fn find_all(&self) -> AppResult<Vec<StatusChange>> {
        sqlx::query_as::<_, StatusChange>("SELECT * FROM order_status_history ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list status history", e)
            })
    }

    /// Find a history entry by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<StatusChange>> {
        sqlx::query_as::<_, StatusChange>("SELECT * FROM order_status_history WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find status change", e)
            })
    }

    /// List an order's history, oldest first.
    pub async fn find_by_order(&self, order_id: i64) -> AppResult<Vec<StatusChange>> {
        sqlx::query_as::<_, StatusChange>(
            "SELECT * FROM order_status_history WHERE order_id = $1 ORDER BY changed_at ASC",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list history by order", e)
        })
    }

    /// List entries that recorded a given status.
    pub async fn find_by_status(&self, status: OrderStatus) -> AppResult<Vec<StatusChange>> {
        sqlx::query_as::<_, StatusChange>(
            "SELECT * FROM order_status_history WHERE status = $1 ORDER BY changed_at ASC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list history by status", e)
        })
    }

    /// List entries associated with a client.
    pub async fn find_by_client(&self, client_id: i64) -> AppResult<Vec<StatusChange>> {
        sqlx::query_as::<_, StatusChange>(
            "SELECT * FROM order_status_history WHERE client_id = $1 ORDER BY changed_at ASC",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list history by client", e)
        })
    }

    /// The most recent entry for an order, if any.
    pub async fn find_latest_for_order(&self, order_id: i64) -> AppResult<Option<StatusChange>> {
        sqlx::query_as::<_, StatusChange>(
            "SELECT * FROM order_status_history WHERE order_id = $1 \
             ORDER BY changed_at DESC LIMIT 1",
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find latest status change", e)
        })
    }

    /// Record a status change (stamped now).
    pub async fn create(&self, data: &NewStatusChange) -> AppResult<StatusChange> {
        sqlx::query_as::<_, StatusChange>(
            "INSERT INTO order_status_history (order_id, status, changed_at, client_id, \
                                               kitchen_staff_id) \
             VALUES ($1, $2, NOW(), $3, $4) \
             RETURNING *",
        )
        .bind(data.order_id)
        .bind(data.status)
        .bind(data.client_id)
        .bind(data.kitchen_staff_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record status change", e))
    }

    /// Delete a history entry by primary key.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM order_status_history WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete status change", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Status change {id} not found")));
        }
        Ok(())
    }

    /// Fetch a history entry while holding an exclusive row lock for `dwell`.
    pub async fn find_by_id_locked(&self, id: i64, dwell: Duration) -> AppResult<StatusChange> {
        locking::fetch_row_locked(&self.pool, SELECT_FOR_UPDATE, id, dwell, "Status change").await
    }
}
