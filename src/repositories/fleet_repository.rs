//! Implementación PostgreSQL de [`FleetRepository`]

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::maintenance_repository::MaintenanceRepository;
use super::mileage_repository::MileageRepository;
use super::vehicle_repository::VehicleRepository;
use super::FleetRepository;
use crate::models::maintenance::MaintenanceRecord;
use crate::models::mileage::{MileageLogEntry, NewMileageLog};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppResult;

pub struct PgFleetRepository {
    vehicles: VehicleRepository,
    maintenance: MaintenanceRepository,
    mileage: MileageRepository,
}

impl PgFleetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            maintenance: MaintenanceRepository::new(pool.clone()),
            mileage: MileageRepository::new(pool),
        }
    }
}

#[async_trait]
impl FleetRepository for PgFleetRepository {
    async fn find_vehicle(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        self.vehicles.find_by_id(id).await
    }

    async fn list_recent_mileage_logs(
        &self,
        vehicle_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<MileageLogEntry>> {
        self.mileage.find_recent_by_vehicle(vehicle_id, limit).await
    }

    async fn find_latest_maintenance(&self, vehicle_id: Uuid) -> AppResult<Option<MaintenanceRecord>> {
        self.maintenance.find_latest_by_vehicle(vehicle_id).await
    }

    async fn list_active_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = self.vehicles.find_by_status(VehicleStatus::Active).await?;
        debug!("🚗 {} vehículos activos", vehicles.len());
        Ok(vehicles)
    }

    async fn record_mileage(&self, vehicle_id: Uuid, log: NewMileageLog) -> AppResult<MileageLogEntry> {
        self.mileage.record(vehicle_id, log).await
    }
}
