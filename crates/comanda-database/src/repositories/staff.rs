//! Kitchen staff repository.

use std::time::Duration;

use sqlx::PgPool;

use comanda_core::error::{AppError, ErrorKind};
use comanda_core::result::AppResult;
use comanda_entity::staff::{KitchenStaff, NewKitchenStaff};

use crate::locking;

const SELECT_FOR_UPDATE: &str = "SELECT * FROM kitchen_staff WHERE id = $1 FOR UPDATE";

/// Repository for kitchen staff CRUD operations.
#[derive(Debug, Clone)]
pub struct KitchenStaffRepository {
    pool: PgPool,
}

impl KitchenStaffRepository {
    /// Create a new kitchen staff repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all kitchen staff.
    pub async fn find_all(&self) -> AppResult<Vec<KitchenStaff>> {
        sqlx::query_as::<_, KitchenStaff>("SELECT * FROM kitchen_staff ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list kitchen staff", e)
            })
    }

    /// Find a staff member by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<KitchenStaff>> {
        sqlx::query_as::<_, KitchenStaff>("SELECT * FROM kitchen_staff WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find kitchen staff", e)
            })
    }

    /// Create a new staff member.
    pub async fn create(&self, data: &NewKitchenStaff) -> AppResult<KitchenStaff> {
        sqlx::query_as::<_, KitchenStaff>(
            "INSERT INTO kitchen_staff (name, email, phone, registered_on, shift, area) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.profile.name)
        .bind(&data.profile.email)
        .bind(&data.profile.phone)
        .bind(data.profile.registered_on)
        .bind(&data.shift)
        .bind(&data.area)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("kitchen_staff_email_key") =>
            {
                AppError::conflict("A staff member with this email already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create kitchen staff", e),
        })
    }

    /// Update all fields of a staff member.
    pub async fn update(&self, id: i64, data: &NewKitchenStaff) -> AppResult<KitchenStaff> {
        sqlx::query_as::<_, KitchenStaff>(
            "UPDATE kitchen_staff SET name = $2, email = $3, phone = $4, registered_on = $5, \
                                      shift = $6, area = $7 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.profile.name)
        .bind(&data.profile.email)
        .bind(&data.profile.phone)
        .bind(data.profile.registered_on)
        .bind(&data.shift)
        .bind(&data.area)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update kitchen staff", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Kitchen staff {id} not found")))
    }

    /// Delete a staff member by primary key.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM kitchen_staff WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete kitchen staff", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Kitchen staff {id} not found")));
        }
        Ok(())
    }

    /// Fetch a staff member while holding an exclusive row lock for `dwell`.
    pub async fn find_by_id_locked(&self, id: i64, dwell: Duration) -> AppResult<KitchenStaff> {
        locking::fetch_row_locked(&self.pool, SELECT_FOR_UPDATE, id, dwell, "Kitchen staff").await
    }
}
