//! Active/inactive status shared by catalog entities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of categories and products.
///
/// Catalog entries are deactivated rather than deleted so historical
/// orders keep resolving their products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CatalogStatus {
    /// Visible and orderable.
    Activo,
    /// Hidden from active listings.
    Inactivo,
}

impl CatalogStatus {
    /// Return the status as its stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activo => "activo",
            Self::Inactivo => "inactivo",
        }
    }
}

impl fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CatalogStatus {
    type Err = comanda_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activo" => Ok(Self::Activo),
            "inactivo" => Ok(Self::Inactivo),
            _ => Err(comanda_core::AppError::validation(format!(
                "Invalid status: '{s}'. Expected 'activo' or 'inactivo'"
            ))),
        }
    }
}
