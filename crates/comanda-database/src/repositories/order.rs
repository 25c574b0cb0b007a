//! Order repository.

use std::time::Duration;

use sqlx::PgPool;

use comanda_core::error::{AppError, ErrorKind};
use comanda_core::result::AppResult;
use comanda_entity::order::{Order, OrderStatus, OrderUpdate};

use crate::locking;

const SELECT_FOR_UPDATE: &str = "SELECT * FROM orders WHERE id = $1 FOR UPDATE";

/// Repository for order CRUD and query operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all orders.
    pub async fn find_all(&self) -> AppResult<Vec<Order>> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))
    }

    /// Find an order by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find order", e))
    }

    /// List a client's orders.
    pub async fn find_by_client(&self, client_id: i64) -> AppResult<Vec<Order>> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE client_id = $1 ORDER BY id")
            .bind(client_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list orders by client", e)
            })
    }

    /// List orders in a given status.
    pub async fn find_by_status(&self, status: OrderStatus) -> AppResult<Vec<Order>> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE status = $1 ORDER BY id")
            .bind(status)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list orders by status", e)
            })
    }

    /// List orders placed today.
    pub async fn find_today(&self) -> AppResult<Vec<Order>> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE placed_on = CURRENT_DATE ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list today's orders", e)
            })
    }

    /// Create a new order. New orders always start today, pending.
    pub async fn create(&self, client_id: i64) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(
            "INSERT INTO orders (client_id, placed_on, status) \
             VALUES ($1, CURRENT_DATE, $2) \
             RETURNING *",
        )
        .bind(client_id)
        .bind(OrderStatus::Pendiente)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create order", e))
    }

    /// Update all fields of an order.
    pub async fn update(&self, id: i64, data: &OrderUpdate) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(
            "UPDATE orders SET client_id = $2, placed_on = $3, status = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.client_id)
        .bind(data.placed_on)
        .bind(data.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update order", e))?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))
    }

    /// Update only the order status.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> AppResult<Order> {
        sqlx::query_as::<_, Order>("UPDATE orders SET status = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update order status", e)
            })?
            .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))
    }

    /// Delete an order by primary key.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete order", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Order {id} not found")));
        }
        Ok(())
    }

    /// Fetch an order while holding an exclusive row lock for `dwell`.
    pub async fn find_by_id_locked(&self, id: i64, dwell: Duration) -> AppResult<Order> {
        locking::fetch_row_locked(&self.pool, SELECT_FOR_UPDATE, id, dwell, "Order").await
    }
}
