//! Menu product repository.

use std::time::Duration;

use sqlx::PgPool;

use comanda_core::error::{AppError, ErrorKind};
use comanda_core::result::AppResult;
use comanda_entity::product::{NewProduct, Product};
use comanda_entity::status::CatalogStatus;

use crate::locking;

const SELECT_FOR_UPDATE: &str = "SELECT * FROM products WHERE id = $1 FOR UPDATE";

/// Repository for menu product CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all products.
    pub async fn find_all(&self) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))
    }

    /// List active products.
    pub async fn find_active(&self) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE status = $1 ORDER BY id")
            .bind(CatalogStatus::Activo)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list active products", e)
            })
    }

    /// List featured products.
    pub async fn find_featured(&self) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE featured = TRUE ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list featured products", e)
            })
    }

    /// List active products in a category.
    pub async fn find_by_category(&self, category_id: i64) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE category_id = $1 AND status = $2 ORDER BY id",
        )
        .bind(category_id)
        .bind(CatalogStatus::Activo)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list products by category", e)
        })
    }

    /// Search products by name (case-insensitive substring).
    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE name ILIKE $1 ORDER BY name ASC")
            .bind(format!("%{name}%"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search products", e)
            })
    }

    /// Find a product by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find product", e))
    }

    /// Create a new product (always starts active).
    pub async fn create(&self, data: &NewProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (category_id, name, description, price, image_url, \
                                   prep_minutes, ingredients, status, featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(data.category_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(&data.image_url)
        .bind(data.prep_minutes)
        .bind(&data.ingredients)
        .bind(CatalogStatus::Activo)
        .bind(data.featured)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create product", e))
    }

    /// Update all editable fields of a product.
    pub async fn update(&self, id: i64, data: &NewProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET category_id = $2, name = $3, description = $4, price = $5, \
                                 image_url = $6, prep_minutes = $7, ingredients = $8, \
                                 featured = $9 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.category_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(&data.image_url)
        .bind(data.prep_minutes)
        .bind(&data.ingredients)
        .bind(data.featured)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
    }

    /// Mark a product inactive.
    pub async fn deactivate(&self, id: i64) -> AppResult<Product> {
        sqlx::query_as::<_, Product>("UPDATE products SET status = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(CatalogStatus::Inactivo)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to deactivate product", e)
            })?
            .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
    }

    /// Delete a product by primary key.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete product", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Product {id} not found")));
        }
        Ok(())
    }

    /// Fetch a product while holding an exclusive row lock for `dwell`.
    pub async fn find_by_id_locked(&self, id: i64, dwell: Duration) -> AppResult<Product> {
        locking::fetch_row_locked(&self.pool, SELECT_FOR_UPDATE, id, dwell, "Product").await
    }
}
