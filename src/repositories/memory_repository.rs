//! Implementación en memoria de [`FleetRepository`]
//!
//! Mismo orden que la versión PostgreSQL: fecha descendente y, a igual
//! fecha, la última inserción primero. Se usa en tests y con FLEET_STORE=memory.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::FleetRepository;
use crate::models::maintenance::MaintenanceRecord;
use crate::models::mileage::{MileageLogEntry, NewMileageLog};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Default)]
pub struct InMemoryFleetRepository {
    vehicles: RwLock<HashMap<Uuid, Vehicle>>,
    maintenance: RwLock<Vec<MaintenanceRecord>>,
    mileage_logs: RwLock<Vec<MileageLogEntry>>,
}

impl InMemoryFleetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_vehicle(&self, vehicle: Vehicle) {
        self.vehicles.write().await.insert(vehicle.id, vehicle);
    }

    pub async fn insert_maintenance(&self, record: MaintenanceRecord) {
        self.maintenance.write().await.push(record);
    }

    /// Inserta una lectura histórica tal cual, sin tocar `current_mileage`
    pub async fn insert_mileage_log(&self, entry: MileageLogEntry) {
        self.mileage_logs.write().await.push(entry);
    }

    pub async fn vehicle_count(&self) -> usize {
        self.vehicles.read().await.len()
    }
}

#[async_trait]
impl FleetRepository for InMemoryFleetRepository {
    async fn find_vehicle(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        Ok(self.vehicles.read().await.get(&id).cloned())
    }

    async fn list_recent_mileage_logs(
        &self,
        vehicle_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<MileageLogEntry>> {
        let logs = self.mileage_logs.read().await;
        let mut recent: Vec<MileageLogEntry> = logs
            .iter()
            .rev()
            .filter(|entry| entry.vehicle_id == vehicle_id)
            .cloned()
            .collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(limit);
        Ok(recent)
    }

    async fn find_latest_maintenance(&self, vehicle_id: Uuid) -> AppResult<Option<MaintenanceRecord>> {
        let records = self.maintenance.read().await;
        // max_by_key devuelve el último máximo: a igual fecha gana la última inserción
        Ok(records
            .iter()
            .filter(|record| record.vehicle_id == vehicle_id)
            .max_by_key(|record| record.date)
            .cloned())
    }

    async fn list_active_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        let mut active: Vec<Vehicle> = vehicles.values().filter(|v| v.is_active()).cloned().collect();
        active.sort_by(|a, b| a.reg_number.cmp(&b.reg_number));
        debug!("🚗 {} vehículos activos (memoria)", active.len());
        Ok(active)
    }

    async fn record_mileage(&self, vehicle_id: Uuid, log: NewMileageLog) -> AppResult<MileageLogEntry> {
        // Mantener el lock de vehículos serializa las subidas de kilometraje
        let mut vehicles = self.vehicles.write().await;
        let vehicle = vehicles
            .get_mut(&vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        let entry = log.into_entry(vehicle_id);
        if entry.mileage > vehicle.current_mileage {
            vehicle.current_mileage = entry.mileage;
        }
        self.mileage_logs.write().await.push(entry.clone());
        Ok(entry)
    }
}
