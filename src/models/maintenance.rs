//! Modelo de registros de mantenimiento (TO)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::closed_category;

/// Tipo de intervención registrada
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceKind {
    Regular,
    OilChange,
    TireChange,
    BrakeService,
    Inspection,
    Other,
}

closed_category!(MaintenanceKind, "maintenance kind", {
    Regular => "regular",
    OilChange => "oil_change",
    TireChange => "tire_change",
    BrakeService => "brake_service",
    Inspection => "inspection",
    Other => "other",
});

/// Registro de mantenimiento - mapea a la tabla maintenance
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    #[sqlx(try_from = "String")]
    pub kind: MaintenanceKind,
    pub date: NaiveDate,
    pub mileage: i64,
    pub cost: Option<Decimal>,
    pub description: Option<String>,
    /// Kilometraje objetivo fijado explícitamente por quien registró el TO
    pub next_maintenance_km: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintenance_kind_parsing() {
        assert_eq!("oil_change".parse::<MaintenanceKind>(), Ok(MaintenanceKind::OilChange));
        assert_eq!("BRAKE_SERVICE".parse::<MaintenanceKind>(), Ok(MaintenanceKind::BrakeService));
        assert!("oil change".parse::<MaintenanceKind>().is_err());
        assert_eq!(MaintenanceKind::ALL.len(), 6);
    }
}
