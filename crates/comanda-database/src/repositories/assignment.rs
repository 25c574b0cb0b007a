//! Courier delivery-assignment repository.

use std::time::Duration;

use sqlx::PgPool;

use comanda_core::error::{AppError, ErrorKind};
use comanda_core::result::AppResult;
use comanda_entity::assignment::{DeliveryAssignment, NewAssignment};

use crate::locking;

const SELECT_FOR_UPDATE: &str = "SELECT * FROM delivery_assignments WHERE id = $1 FOR UPDATE";

/// Repository for courier delivery assignments.
#[derive(Debug, Clone)]
pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    /// Create a new assignment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all assignments.
    pub async fn find_all(&self) -> AppResult<Vec<DeliveryAssignment>> {
        sqlx::query_as::<_, DeliveryAssignment>("SELECT * FROM delivery_assignments ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list assignments", e)
            })
    }

    /// Find an assignment by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<DeliveryAssignment>> {
        sqlx::query_as::<_, DeliveryAssignment>("SELECT * FROM delivery_assignments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find assignment", e)
            })
    }

    /// List assignments for an order.
    pub async fn find_by_order(&self, order_id: i64) -> AppResult<Vec<DeliveryAssignment>> {
        sqlx::query_as::<_, DeliveryAssignment>(
            "SELECT * FROM delivery_assignments WHERE order_id = $1 ORDER BY id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list assignments by order", e)
        })
    }

    /// List assignments of a courier.
    pub async fn find_by_courier(&self, courier_id: i64) -> AppResult<Vec<DeliveryAssignment>> {
        sqlx::query_as::<_, DeliveryAssignment>(
            "SELECT * FROM delivery_assignments WHERE courier_id = $1 ORDER BY id",
        )
        .bind(courier_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list assignments by courier", e)
        })
    }

    /// List undelivered assignments.
    pub async fn find_pending(&self) -> AppResult<Vec<DeliveryAssignment>> {
        sqlx::query_as::<_, DeliveryAssignment>(
            "SELECT * FROM delivery_assignments WHERE delivered_at IS NULL ORDER BY assigned_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list pending assignments", e)
        })
    }

    /// Create a new assignment (stamped now, undelivered).
    pub async fn create(&self, data: &NewAssignment) -> AppResult<DeliveryAssignment> {
        sqlx::query_as::<_, DeliveryAssignment>(
            "INSERT INTO delivery_assignments (order_id, courier_id, assigned_at) \
             VALUES ($1, $2, NOW()) \
             RETURNING *",
        )
        .bind(data.order_id)
        .bind(data.courier_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create assignment", e))
    }

    /// Reassign an order/courier pair.
    pub async fn update(&self, id: i64, data: &NewAssignment) -> AppResult<DeliveryAssignment> {
        sqlx::query_as::<_, DeliveryAssignment>(
            "UPDATE delivery_assignments SET order_id = $2, courier_id = $3 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.order_id)
        .bind(data.courier_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update assignment", e))?
        .ok_or_else(|| AppError::not_found(format!("Assignment {id} not found")))
    }

    /// Stamp an assignment as delivered now.
    pub async fn mark_delivered(&self, id: i64) -> AppResult<DeliveryAssignment> {
        sqlx::query_as::<_, DeliveryAssignment>(
            "UPDATE delivery_assignments SET delivered_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark assignment delivered", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Assignment {id} not found")))
    }

    /// Delete an assignment by primary key.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM delivery_assignments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete assignment", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Assignment {id} not found")));
        }
        Ok(())
    }

    /// Fetch an assignment while holding an exclusive row lock for `dwell`.
    pub async fn find_by_id_locked(
        &self,
        id: i64,
        dwell: Duration,
    ) -> AppResult<DeliveryAssignment> {
        locking::fetch_row_locked(&self.pool, SELECT_FOR_UPDATE, id, dwell, "Assignment").await
    }
}
