//! Repositorios de la flota
//!
//! El motor de pronóstico solo conoce el trait [`FleetRepository`]. Hay dos
//! implementaciones: PostgreSQL (`PgFleetRepository`) y memoria
//! (`InMemoryFleetRepository`), con la misma semántica de orden.

pub mod vehicle_repository;
pub mod maintenance_repository;
pub mod mileage_repository;
pub mod fleet_repository;
pub mod memory_repository;

pub use fleet_repository::PgFleetRepository;
pub use memory_repository::InMemoryFleetRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::maintenance::MaintenanceRecord;
use crate::models::mileage::{MileageLogEntry, NewMileageLog};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppResult;

/// Operaciones de acceso a datos que consume el motor de pronóstico
#[async_trait]
pub trait FleetRepository: Send + Sync {
    async fn find_vehicle(&self, id: Uuid) -> AppResult<Option<Vehicle>>;

    /// Las `limit` lecturas más recientes, fecha descendente
    async fn list_recent_mileage_logs(
        &self,
        vehicle_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<MileageLogEntry>>;

    /// El mantenimiento con la fecha más reciente, si existe
    async fn find_latest_maintenance(&self, vehicle_id: Uuid) -> AppResult<Option<MaintenanceRecord>>;

    /// Vehículos con estado `active`
    async fn list_active_vehicles(&self) -> AppResult<Vec<Vehicle>>;

    /// Registra una lectura y sube `current_mileage` si la lectura es mayor.
    /// `NotFound` si el vehículo no existe.
    async fn record_mileage(&self, vehicle_id: Uuid, log: NewMileageLog) -> AppResult<MileageLogEntry>;
}
