use uuid::Uuid;

use crate::dto::forecast_dto::{round_to_cents, PredictionResponse, UpcomingMaintenanceResponse, UrgencyResponse};
use crate::services::MaintenanceForecastService;
use crate::utils::errors::AppError;

pub struct ForecastController {
    service: MaintenanceForecastService,
}

impl ForecastController {
    pub fn new(service: MaintenanceForecastService) -> Self {
        Self { service }
    }

    pub async fn get_prediction(&self, vehicle_id: Uuid) -> Result<PredictionResponse, AppError> {
        let forecast = self.service.predict_next_maintenance(vehicle_id).await?;
        let daily_mileage = self.service.daily_mileage(vehicle_id).await?;
        let urgency = self.service.classify(Some(&forecast));

        Ok(PredictionResponse {
            vehicle_id,
            forecast,
            daily_mileage: round_to_cents(daily_mileage),
            urgency,
        })
    }

    pub async fn get_urgency(&self, vehicle_id: Uuid) -> Result<UrgencyResponse, AppError> {
        let urgency = self.service.classify_urgency(vehicle_id).await?;
        Ok(UrgencyResponse { vehicle_id, urgency })
    }

    pub async fn list_upcoming(&self) -> Result<Vec<UpcomingMaintenanceResponse>, AppError> {
        let upcoming = self.service.list_upcoming_forecasts().await?;
        Ok(upcoming.into_iter().map(UpcomingMaintenanceResponse::from).collect())
    }
}
