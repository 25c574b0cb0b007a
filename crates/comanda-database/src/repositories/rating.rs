//! Order rating repository.

use std::time::Duration;

use sqlx::PgPool;

use comanda_core::error::{AppError, ErrorKind};
use comanda_core::result::AppResult;
use comanda_entity::rating::{NewRating, Rating};

use crate::locking;

const SELECT_FOR_UPDATE: &str = "SELECT * FROM ratings WHERE id = $1 FOR UPDATE";

/// Repository for order rating CRUD and aggregate queries.
#[derive(Debug, Clone)]
pub struct RatingRepository {
    pool: PgPool,
}

impl RatingRepository {
    /// Create a new rating repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all ratings.
    pub async fn find_all(&self) -> AppResult<Vec<Rating>> {
        sqlx::query_as::<_, Rating>("SELECT * FROM ratings ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list ratings", e))
    }

    /// Find a rating by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Rating>> {
        sqlx::query_as::<_, Rating>("SELECT * FROM ratings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find rating", e))
    }

    /// List ratings of an order.
    pub async fn find_by_order(&self, order_id: i64) -> AppResult<Vec<Rating>> {
        sqlx::query_as::<_, Rating>("SELECT * FROM ratings WHERE order_id = $1 ORDER BY id")
            .bind(order_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list ratings by order", e)
            })
    }

    /// List ratings left by a client.
    pub async fn find_by_client(&self, client_id: i64) -> AppResult<Vec<Rating>> {
        sqlx::query_as::<_, Rating>("SELECT * FROM ratings WHERE client_id = $1 ORDER BY id")
            .bind(client_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list ratings by client", e)
            })
    }

    /// Average score for an order; 0.0 when unrated.
    pub async fn average_for_order(&self, order_id: i64) -> AppResult<f64> {
        let avg: Option<f64> =
            sqlx::query_scalar("SELECT AVG(score)::float8 FROM ratings WHERE order_id = $1")
                .bind(order_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to average order ratings", e)
                })?;
        Ok(avg.unwrap_or(0.0))
    }

    /// Average score across a client's ratings; 0.0 when none.
    pub async fn average_for_client(&self, client_id: i64) -> AppResult<f64> {
        let avg: Option<f64> =
            sqlx::query_scalar("SELECT AVG(score)::float8 FROM ratings WHERE client_id = $1")
                .bind(client_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to average client ratings", e)
                })?;
        Ok(avg.unwrap_or(0.0))
    }

    /// Create a new rating (stamped now).
    pub async fn create(&self, data: &NewRating) -> AppResult<Rating> {
        sqlx::query_as::<_, Rating>(
            "INSERT INTO ratings (order_id, client_id, score, comment, modified_at) \
             VALUES ($1, $2, $3, $4, NOW()) \
             RETURNING *",
        )
        .bind(data.order_id)
        .bind(data.client_id)
        .bind(data.score)
        .bind(&data.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create rating", e))
    }

    /// Update all fields of a rating and bump its modification time.
    pub async fn update(&self, id: i64, data: &NewRating) -> AppResult<Rating> {
        sqlx::query_as::<_, Rating>(
            "UPDATE ratings SET order_id = $2, client_id = $3, score = $4, comment = $5, \
                                modified_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.order_id)
        .bind(data.client_id)
        .bind(data.score)
        .bind(&data.comment)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update rating", e))?
        .ok_or_else(|| AppError::not_found(format!("Rating {id} not found")))
    }

    /// Delete a rating by primary key.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM ratings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete rating", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Rating {id} not found")));
        }
        Ok(())
    }

    /// Fetch a rating while holding an exclusive row lock for `dwell`.
    pub async fn find_by_id_locked(&self, id: i64, dwell: Duration) -> AppResult<Rating> {
        locking::fetch_row_locked(&self.pool, SELECT_FOR_UPDATE, id, dwell, "Rating").await
    }
}
