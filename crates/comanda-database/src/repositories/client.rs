//! Client repository.

use std::time::Duration;

use sqlx::PgPool;

use comanda_core::error::{AppError, ErrorKind};
use comanda_core::result::AppResult;
use comanda_entity::client::{Client, NewClient};

use crate::locking;

const SELECT_FOR_UPDATE: &str = "SELECT * FROM clients WHERE id = $1 FOR UPDATE";

/// Repository for client CRUD operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    /// Create a new client repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all clients.
    pub async fn find_all(&self) -> AppResult<Vec<Client>> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list clients", e))
    }

    /// Find a client by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Client>> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find client", e))
    }

    /// Create a new client.
    pub async fn create(&self, data: &NewClient) -> AppResult<Client> {
        sqlx::query_as::<_, Client>(
            "INSERT INTO clients (name, email, phone, registered_on, address) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.profile.name)
        .bind(&data.profile.email)
        .bind(&data.profile.phone)
        .bind(data.profile.registered_on)
        .bind(&data.address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("clients_email_key") =>
            {
                AppError::conflict("A client with this email already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create client", e),
        })
    }

    /// Update all fields of a client.
    pub async fn update(&self, id: i64, data: &NewClient) -> AppResult<Client> {
        sqlx::query_as::<_, Client>(
            "UPDATE clients SET name = $2, email = $3, phone = $4, registered_on = $5, \
                                address = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.profile.name)
        .bind(&data.profile.email)
        .bind(&data.profile.phone)
        .bind(data.profile.registered_on)
        .bind(&data.address)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update client", e))?
        .ok_or_else(|| AppError::not_found(format!("Client {id} not found")))
    }

    /// Delete a client by primary key.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete client", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Client {id} not found")));
        }
        Ok(())
    }

    /// Fetch a client while holding an exclusive row lock for `dwell`.
    pub async fn find_by_id_locked(&self, id: i64, dwell: Duration) -> AppResult<Client> {
        locking::fetch_row_locked(&self.pool, SELECT_FOR_UPDATE, id, dwell, "Client").await
    }
}
