use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::forecast_controller::ForecastController;
use crate::controllers::mileage_controller::MileageController;
use crate::dto::forecast_dto::{PredictionResponse, UrgencyResponse};
use crate::dto::mileage_dto::MileageLogResponse;
use crate::dto::ApiResponse;
use crate::models::mileage::NewMileageLog;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/:id/prediction", get(get_prediction))
        .route("/:id/urgency", get(get_urgency))
        .route("/:id/mileage", get(list_mileage).post(record_mileage))
}

async fn get_prediction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PredictionResponse>, AppError> {
    let controller = ForecastController::new(state.forecast_service.clone());
    let response = controller.get_prediction(id).await?;
    Ok(Json(response))
}

async fn get_urgency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UrgencyResponse>, AppError> {
    let controller = ForecastController::new(state.forecast_service.clone());
    let response = controller.get_urgency(id).await?;
    Ok(Json(response))
}

async fn list_mileage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<MileageLogResponse>>>, AppError> {
    let controller = MileageController::new(state.repository.clone(), state.mileage_window());
    let response = controller.list_recent(id).await?;
    Ok(Json(response))
}

async fn record_mileage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NewMileageLog>,
) -> Result<(StatusCode, Json<ApiResponse<MileageLogResponse>>), AppError> {
    let controller = MileageController::new(state.repository.clone(), state.mileage_window());
    let response = controller.record(id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
