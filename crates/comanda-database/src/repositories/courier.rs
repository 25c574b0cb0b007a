//! Courier repository.

use std::time::Duration;

use sqlx::PgPool;

use comanda_core::error::{AppError, ErrorKind};
use comanda_core::result::AppResult;
use comanda_entity::courier::{Courier, NewCourier};

use crate::locking;

const SELECT_FOR_UPDATE: &str = "SELECT * FROM couriers WHERE id = $1 FOR UPDATE";

/// Repository for courier CRUD operations.
#[derive(Debug, Clone)]
pub struct CourierRepository {
    pool: PgPool,
}

impl CourierRepository {
    /// Create a new courier repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all couriers.
    pub async fn find_all(&self) -> AppResult<Vec<Courier>> {
        sqlx::query_as::<_, Courier>("SELECT * FROM couriers ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list couriers", e))
    }

    /// Find a courier by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Courier>> {
        sqlx::query_as::<_, Courier>("SELECT * FROM couriers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find courier", e))
    }

    /// Create a new courier.
    pub async fn create(&self, data: &NewCourier) -> AppResult<Courier> {
        sqlx::query_as::<_, Courier>(
            "INSERT INTO couriers (name, email, phone, registered_on, zone) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.profile.name)
        .bind(&data.profile.email)
        .bind(&data.profile.phone)
        .bind(data.profile.registered_on)
        .bind(&data.zone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("couriers_email_key") =>
            {
                AppError::conflict("A courier with this email already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create courier", e),
        })
    }

    /// Update all fields of a courier.
    pub async fn update(&self, id: i64, data: &NewCourier) -> AppResult<Courier> {
        sqlx::query_as::<_, Courier>(
            "UPDATE couriers SET name = $2, email = $3, phone = $4, registered_on = $5, \
                                 zone = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.profile.name)
        .bind(&data.profile.email)
        .bind(&data.profile.phone)
        .bind(data.profile.registered_on)
        .bind(&data.zone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update courier", e))?
        .ok_or_else(|| AppError::not_found(format!("Courier {id} not found")))
    }

    /// Delete a courier by primary key.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM couriers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete courier", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Courier {id} not found")));
        }
        Ok(())
    }

    /// Fetch a courier while holding an exclusive row lock for `dwell`.
    pub async fn find_by_id_locked(&self, id: i64, dwell: Duration) -> AppResult<Courier> {
        locking::fetch_row_locked(&self.pool, SELECT_FOR_UPDATE, id, dwell, "Courier").await
    }
}
