//! Menu category repository.

use std::time::Duration;

use sqlx::PgPool;

use comanda_core::error::{AppError, ErrorKind};
use comanda_core::result::AppResult;
use comanda_entity::category::{Category, NewCategory};
use comanda_entity::status::CatalogStatus;

use crate::locking;

const SELECT_FOR_UPDATE: &str = "SELECT * FROM categories WHERE id = $1 FOR UPDATE";

/// Repository for menu category CRUD operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories.
    pub async fn find_all(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))
    }

    /// List active categories.
    pub async fn find_active(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE status = $1 ORDER BY id")
            .bind(CatalogStatus::Activo)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list active categories", e)
            })
    }

    /// Find a category by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category", e))
    }

    /// Search categories by name (case-insensitive substring).
    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE name ILIKE $1 ORDER BY name ASC",
        )
        .bind(format!("%{name}%"))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search categories", e))
    }

    /// Create a new category (always starts active).
    pub async fn create(&self, data: &NewCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, description, status) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(CatalogStatus::Activo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create category", e))
    }

    /// Update a category's name and description.
    pub async fn update(&self, id: i64, data: &NewCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $2, description = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update category", e))?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }

    /// Mark a category inactive.
    pub async fn deactivate(&self, id: i64) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(CatalogStatus::Inactivo)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to deactivate category", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }

    /// Delete a category by primary key.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Category {id} not found")));
        }
        Ok(())
    }

    /// Fetch a category while holding an exclusive row lock for `dwell`.
    pub async fn find_by_id_locked(&self, id: i64, dwell: Duration) -> AppResult<Category> {
        locking::fetch_row_locked(&self.pool, SELECT_FOR_UPDATE, id, dwell, "Category").await
    }
}
