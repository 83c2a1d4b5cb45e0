use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::{ForecastPolicy, UrgencyThresholds};
use crate::models::forecast::{MaintenanceForecast, UpcomingMaintenance, UrgencyLevel};
use crate::repositories::FleetRepository;
use crate::services::forecast_engine::{project_forecast, target_status, TargetStatus};
use crate::services::mileage_rate::estimate_daily_rate;
use crate::services::urgency::classify;
use crate::utils::errors::{not_found_error, AppResult};

/// Servicio de pronóstico de mantenimiento.
///
/// No guarda estado entre llamadas: cada consulta lee del repositorio y
/// calcula de nuevo. Las variantes `_on` reciben la fecha de referencia.
#[derive(Clone)]
pub struct MaintenanceForecastService {
    repository: Arc<dyn FleetRepository>,
    policy: ForecastPolicy,
    thresholds: UrgencyThresholds,
}

impl MaintenanceForecastService {
    pub fn new(
        repository: Arc<dyn FleetRepository>,
        policy: ForecastPolicy,
        thresholds: UrgencyThresholds,
    ) -> Self {
        Self {
            repository,
            policy,
            thresholds,
        }
    }

    pub fn policy(&self) -> &ForecastPolicy {
        &self.policy
    }

    pub fn thresholds(&self) -> &UrgencyThresholds {
        &self.thresholds
    }

    /// Kilometraje medio diario según las lecturas más recientes
    pub async fn daily_mileage(&self, vehicle_id: Uuid) -> AppResult<f64> {
        let logs = self
            .repository
            .list_recent_mileage_logs(vehicle_id, self.policy.mileage_window)
            .await?;
        Ok(estimate_daily_rate(&logs))
    }

    pub async fn predict_next_maintenance(&self, vehicle_id: Uuid) -> AppResult<MaintenanceForecast> {
        self.predict_next_maintenance_on(vehicle_id, today()).await
    }

    #[instrument(skip(self))]
    pub async fn predict_next_maintenance_on(
        &self,
        vehicle_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<MaintenanceForecast> {
        let vehicle = self
            .repository
            .find_vehicle(vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        let last_maintenance = self.repository.find_latest_maintenance(vehicle_id).await?;

        let (target, remaining_km) =
            match target_status(&vehicle, last_maintenance.as_ref(), &self.policy, today) {
                TargetStatus::Reached(forecast) => {
                    debug!(
                        "⏰ {} vencido: actual {} km",
                        vehicle.display_name(),
                        vehicle.current_mileage
                    );
                    return Ok(forecast);
                }
                TargetStatus::Ahead { target, remaining_km } => (target, remaining_km),
            };

        let rate = self.daily_mileage(vehicle_id).await?;
        let forecast = project_forecast(
            target,
            remaining_km,
            last_maintenance.as_ref(),
            rate,
            &self.policy,
            today,
        );

        debug!(
            "📅 {}: {} km restantes, ritmo {:.2} km/día, {} días → {}",
            vehicle.display_name(),
            remaining_km,
            rate,
            forecast.days_remaining,
            forecast.predicted_date
        );
        Ok(forecast)
    }

    /// Clasifica un pronóstico ya calculado
    pub fn classify(&self, forecast: Option<&MaintenanceForecast>) -> UrgencyLevel {
        classify(forecast, &self.thresholds)
    }

    pub async fn classify_urgency(&self, vehicle_id: Uuid) -> AppResult<UrgencyLevel> {
        self.classify_urgency_on(vehicle_id, today()).await
    }

    /// `Unknown` si el vehículo no existe; otros errores se propagan
    pub async fn classify_urgency_on(&self, vehicle_id: Uuid, today: NaiveDate) -> AppResult<UrgencyLevel> {
        match self.predict_next_maintenance_on(vehicle_id, today).await {
            Ok(forecast) => Ok(self.classify(Some(&forecast))),
            Err(e) if e.is_not_found() => Ok(self.classify(None)),
            Err(e) => Err(e),
        }
    }

    pub async fn list_upcoming_forecasts(&self) -> AppResult<Vec<UpcomingMaintenance>> {
        self.list_upcoming_forecasts_on(today()).await
    }

    /// Vista de flota: vehículos activos ordenados por fecha prevista
    #[instrument(skip(self))]
    pub async fn list_upcoming_forecasts_on(&self, today: NaiveDate) -> AppResult<Vec<UpcomingMaintenance>> {
        let vehicles = self.repository.list_active_vehicles().await?;
        let mut upcoming = Vec::with_capacity(vehicles.len());

        for vehicle in vehicles {
            let forecast = match self.predict_next_maintenance_on(vehicle.id, today).await {
                Ok(forecast) => forecast,
                Err(e) if e.is_not_found() => {
                    debug!("🔍 {} desapareció durante el cálculo, se omite", vehicle.id);
                    continue;
                }
                Err(e) => return Err(e),
            };
            let urgency = self.classify(Some(&forecast));
            upcoming.push(UpcomingMaintenance {
                vehicle,
                forecast,
                urgency,
            });
        }

        // sort_by es estable: a igual fecha se conserva el orden del listado
        upcoming.sort_by(|a, b| a.forecast.predicted_date.cmp(&b.forecast.predicted_date));

        info!("📋 {} pronósticos de mantenimiento calculados", upcoming.len());
        Ok(upcoming)
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
