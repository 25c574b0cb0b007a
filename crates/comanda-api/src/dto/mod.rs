//! Request and response DTOs.

pub mod request;
pub mod response;

use validator::Validate;

use comanda_core::error::AppError;
use comanda_core::result::AppResult;

/// Runs declarative validation on a request DTO.
pub fn validate_dto<T: Validate>(dto: &T) -> AppResult<()> {
    dto.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
