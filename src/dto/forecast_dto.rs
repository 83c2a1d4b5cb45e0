use serde::Serialize;
use uuid::Uuid;

use super::vehicle_dto::VehicleSummary;
use crate::models::forecast::{MaintenanceForecast, UpcomingMaintenance, UrgencyLevel};

/// Response del pronóstico de un vehículo
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub vehicle_id: Uuid,
    pub forecast: MaintenanceForecast,
    /// Redondeado a 2 decimales
    pub daily_mileage: f64,
    pub urgency: UrgencyLevel,
}

/// Response de la urgencia de un vehículo
#[derive(Debug, Serialize)]
pub struct UrgencyResponse {
    pub vehicle_id: Uuid,
    pub urgency: UrgencyLevel,
}

/// Entrada de la vista de flota
#[derive(Debug, Serialize)]
pub struct UpcomingMaintenanceResponse {
    pub vehicle: VehicleSummary,
    pub forecast: MaintenanceForecast,
    pub urgency: UrgencyLevel,
}

impl From<UpcomingMaintenance> for UpcomingMaintenanceResponse {
    fn from(item: UpcomingMaintenance) -> Self {
        Self {
            vehicle: item.vehicle.into(),
            forecast: item.forecast,
            urgency: item.urgency,
        }
    }
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
