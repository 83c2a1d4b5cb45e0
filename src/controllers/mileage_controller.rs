use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::mileage_dto::MileageLogResponse;
use crate::dto::ApiResponse;
use crate::models::mileage::NewMileageLog;
use crate::repositories::FleetRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct MileageController {
    repository: Arc<dyn FleetRepository>,
    window: usize,
}

impl MileageController {
    pub fn new(repository: Arc<dyn FleetRepository>, window: usize) -> Self {
        Self { repository, window }
    }

    pub async fn record(
        &self,
        vehicle_id: Uuid,
        request: NewMileageLog,
    ) -> Result<ApiResponse<MileageLogResponse>, AppError> {
        request.validate()?;

        let entry = self.repository.record_mileage(vehicle_id, request).await?;
        info!("🛣️ Lectura registrada para {}: {} km ({})", vehicle_id, entry.mileage, entry.date);

        Ok(ApiResponse::success_with_message(
            entry.into(),
            "Kilometraje registrado exitosamente".to_string(),
        ))
    }

    pub async fn list_recent(&self, vehicle_id: Uuid) -> Result<ApiResponse<Vec<MileageLogResponse>>, AppError> {
        if self.repository.find_vehicle(vehicle_id).await?.is_none() {
            return Err(not_found_error("Vehicle", &vehicle_id.to_string()));
        }

        let logs = self.repository.list_recent_mileage_logs(vehicle_id, self.window).await?;
        Ok(ApiResponse::success(logs.into_iter().map(MileageLogResponse::from).collect()))
    }
}
