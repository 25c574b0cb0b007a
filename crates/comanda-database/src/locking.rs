//! Exclusive row-lock fetch shared by every repository.
//!
//! Implements the lock probe exposed as `GET /<resource>/{id}/lock`: the
//! target row is locked with `SELECT ... FOR UPDATE` inside a dedicated
//! transaction, held for a configured dwell, then released by committing.
//! Any other transaction trying to lock or update the same row blocks
//! until the dwell ends.

use std::time::Duration;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use comanda_core::error::{AppError, ErrorKind};
use comanda_core::result::AppResult;

/// Fetch one row by id while holding an exclusive lock on it.
///
/// `sql` must be the entity's `SELECT ... WHERE id = $1 FOR UPDATE`
/// statement. Returns `NotFound` when the row does not exist. The lock is
/// released at the transaction boundary in every path: commit on success,
/// rollback on error, and rollback via the transaction guard if the
/// calling request is cancelled mid-dwell.
pub async fn fetch_row_locked<T>(
    pool: &PgPool,
    sql: &str,
    id: i64,
    dwell: Duration,
    entity: &str,
) -> AppResult<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut tx = pool.begin().await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to begin lock transaction", e)
    })?;

    let row = sqlx::query_as::<_, T>(sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to lock {entity} row"),
                e,
            )
        })?;

    let Some(locked) = row else {
        // Dropping `tx` rolls back, so a missing row never holds a lock.
        return Err(AppError::not_found(format!("{entity} {id} not found")));
    };

    if !dwell.is_zero() {
        debug!(entity, id, dwell_seconds = dwell.as_secs(), "Holding row lock");
        tokio::time::sleep(dwell).await;
    }

    tx.commit().await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to commit lock transaction", e)
    })?;

    Ok(locked)
}
