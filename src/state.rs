//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::{EnvironmentConfig, ForecastPolicy, UrgencyThresholds};
use crate::repositories::FleetRepository;
use crate::services::MaintenanceForecastService;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn FleetRepository>,
    pub forecast_service: MaintenanceForecastService,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn FleetRepository>,
        config: EnvironmentConfig,
        policy: ForecastPolicy,
        thresholds: UrgencyThresholds,
    ) -> Self {
        Self {
            forecast_service: MaintenanceForecastService::new(repository.clone(), policy, thresholds),
            repository,
            config,
        }
    }

    /// Lecturas devueltas por el listado del journal
    pub fn mileage_window(&self) -> usize {
        self.forecast_service.policy().mileage_window
    }
}
