//! Order line-item repository.

use sqlx::PgPool;

use comanda_core::error::{AppError, ErrorKind};
use comanda_core::result::AppResult;
use comanda_entity::order_item::{NewOrderItem, OrderItem};

/// Repository for order line-item CRUD and query operations.
#[derive(Debug, Clone)]
pub struct OrderItemRepository {
    pool: PgPool,
}

impl OrderItemRepository {
    /// Create a new order-item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all line items.
    pub async fn find_all(&self) -> AppResult<Vec<OrderItem>> {
        sqlx::query_as::<_, OrderItem>("SELECT * FROM order_items ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list order items", e)
            })
    }

    /// Find a line item by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<OrderItem>> {
        sqlx::query_as::<_, OrderItem>("SELECT * FROM order_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find order item", e))
    }

    /// List the line items of an order.
    pub async fn find_by_order(&self, order_id: i64) -> AppResult<Vec<OrderItem>> {
        sqlx::query_as::<_, OrderItem>("SELECT * FROM order_items WHERE order_id = $1 ORDER BY id")
            .bind(order_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list items by order", e)
            })
    }

    /// List line items referencing a product.
    pub async fn find_by_product(&self, product_id: i64) -> AppResult<Vec<OrderItem>> {
        sqlx::query_as::<_, OrderItem>(
            "SELECT * FROM order_items WHERE product_id = $1 ORDER BY id",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list items by product", e)
        })
    }

    /// List line items that carry special instructions.
    pub async fn find_with_special_instructions(&self) -> AppResult<Vec<OrderItem>> {
        sqlx::query_as::<_, OrderItem>(
            "SELECT * FROM order_items \
             WHERE special_instructions IS NOT NULL AND special_instructions <> '' \
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list items with special instructions",
                e,
            )
        })
    }

    /// Create a new line item.
    pub async fn create(&self, data: &NewOrderItem) -> AppResult<OrderItem> {
        sqlx::query_as::<_, OrderItem>(
            "INSERT INTO order_items (order_id, product_id, quantity, unit_price, \
                                      special_instructions) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.order_id)
        .bind(data.product_id)
        .bind(data.quantity)
        .bind(data.unit_price)
        .bind(&data.special_instructions)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create order item", e))
    }

    /// Update all fields of a line item.
    pub async fn update(&self, id: i64, data: &NewOrderItem) -> AppResult<OrderItem> {
        sqlx::query_as::<_, OrderItem>(
            "UPDATE order_items SET order_id = $2, product_id = $3, quantity = $4, \
                                    unit_price = $5, special_instructions = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.order_id)
        .bind(data.product_id)
        .bind(data.quantity)
        .bind(data.unit_price)
        .bind(&data.special_instructions)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update order item", e))?
        .ok_or_else(|| AppError::not_found(format!("Order item {id} not found")))
    }

    /// Delete a line item by primary key.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM order_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete order item", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Order item {id} not found")));
        }
        Ok(())
    }

    /// Delete every line item of an order. Returns the number removed.
    pub async fn delete_by_order(&self, order_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete items by order", e)
            })?;

        Ok(result.rows_affected())
    }
}
