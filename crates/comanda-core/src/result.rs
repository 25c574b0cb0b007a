//! Convenience result type alias for Comanda.

use crate::error::AppError;

/// A specialized `Result` type for Comanda operations.
pub type AppResult<T> = Result<T, AppError>;
