use serde::Serialize;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleStatus, VehicleType};

// Resumen de vehículo para las vistas de mantenimiento
#[derive(Debug, Serialize)]
pub struct VehicleSummary {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub reg_number: String,
    pub vin: String,
    pub vehicle_type: VehicleType,
    pub initial_mileage: i64,
    pub current_mileage: i64,
    pub status: VehicleStatus,
}

impl From<Vehicle> for VehicleSummary {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            reg_number: vehicle.reg_number,
            vin: vehicle.vin,
            vehicle_type: vehicle.vehicle_type,
            initial_mileage: vehicle.initial_mileage,
            current_mileage: vehicle.current_mileage,
            status: vehicle.status,
        }
    }
}
