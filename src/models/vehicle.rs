//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como lo lee el motor de
//! pronóstico. Mapea a la tabla `vehicles`; las columnas de categoría se
//! guardan como texto y se convierten a enums cerrados al leerlas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::closed_category;

/// Estado operativo del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Repair,
    Inactive,
}

closed_category!(VehicleStatus, "vehicle status", {
    Active => "active",
    Maintenance => "maintenance",
    Repair => "repair",
    Inactive => "inactive",
});

/// Tipo de vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Truck,
    Car,
    Special,
}

closed_category!(VehicleType, "vehicle type", {
    Truck => "truck",
    Car => "car",
    Special => "special",
});

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub reg_number: String,
    pub vin: String,
    #[sqlx(try_from = "String")]
    pub vehicle_type: VehicleType,
    pub initial_mileage: i64,
    pub current_mileage: i64,
    #[sqlx(try_from = "String")]
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn is_active(&self) -> bool {
        self.status == VehicleStatus::Active
    }

    /// Nombre corto para logs: "Marca Modelo (MATRÍCULA)"
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.brand, self.model, self.reg_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_status_parsing_is_total() {
        assert_eq!("active".parse::<VehicleStatus>(), Ok(VehicleStatus::Active));
        assert_eq!(" Repair ".parse::<VehicleStatus>(), Ok(VehicleStatus::Repair));
        assert_eq!("INACTIVE".parse::<VehicleStatus>(), Ok(VehicleStatus::Inactive));

        let err = "scrapped".parse::<VehicleStatus>().unwrap_err();
        assert_eq!(err.category, "vehicle status");
        assert_eq!(err.value, "scrapped");
        assert_eq!(err.to_string(), "unknown vehicle status 'scrapped'");
    }

    #[test]
    fn test_vehicle_status_round_trips_through_text() {
        for status in VehicleStatus::ALL {
            assert_eq!(VehicleStatus::try_from(status.to_string()), Ok(*status));
        }
    }

    #[test]
    fn test_vehicle_type_rejects_unknown() {
        assert_eq!("truck".parse::<VehicleType>(), Ok(VehicleType::Truck));
        assert!("bicycle".parse::<VehicleType>().is_err());
        assert!("".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&VehicleStatus::Maintenance).unwrap();
        assert_eq!(json, "\"maintenance\"");
    }
}
