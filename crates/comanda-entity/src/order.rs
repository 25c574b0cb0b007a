//! Order entity model and status enumeration.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle states of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Just placed, not yet picked up by the kitchen.
    Pendiente,
    /// Being prepared.
    EnPreparacion,
    /// Ready for pickup or delivery.
    Listo,
    /// Out for delivery.
    EnCamino,
    /// Delivered to the client.
    Entregado,
    /// Cancelled.
    Cancelado,
}

impl OrderStatus {
    /// Return the status as its stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::EnPreparacion => "EN_PREPARACION",
            Self::Listo => "LISTO",
            Self::EnCamino => "EN_CAMINO",
            Self::Entregado => "ENTREGADO",
            Self::Cancelado => "CANCELADO",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = comanda_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDIENTE" => Ok(Self::Pendiente),
            "EN_PREPARACION" => Ok(Self::EnPreparacion),
            "LISTO" => Ok(Self::Listo),
            "EN_CAMINO" => Ok(Self::EnCamino),
            "ENTREGADO" => Ok(Self::Entregado),
            "CANCELADO" => Ok(Self::Cancelado),
            _ => Err(comanda_core::AppError::validation(format!(
                "Invalid order status: '{s}'"
            ))),
        }
    }
}

/// A client order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Unique order identifier.
    pub id: i64,
    /// Client who placed the order.
    pub client_id: i64,
    /// Date the order was placed.
    pub placed_on: NaiveDate,
    /// Current status.
    pub status: OrderStatus,
}

/// Full-field update payload for an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    /// Client who placed the order.
    pub client_id: i64,
    /// Date the order was placed.
    pub placed_on: NaiveDate,
    /// Current status.
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            OrderStatus::Pendiente,
            OrderStatus::EnPreparacion,
            OrderStatus::Listo,
            OrderStatus::EnCamino,
            OrderStatus::Entregado,
            OrderStatus::Cancelado,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!(
            "en_camino".parse::<OrderStatus>().unwrap(),
            OrderStatus::EnCamino
        );
        assert!("DESCONOCIDO".parse::<OrderStatus>().is_err());
    }
}
