use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::forecast_controller::ForecastController;
use crate::dto::forecast_dto::UpcomingMaintenanceResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new().route("/upcoming", get(list_upcoming))
}

async fn list_upcoming(
    State(state): State<AppState>,
) -> Result<Json<Vec<UpcomingMaintenanceResponse>>, AppError> {
    let controller = ForecastController::new(state.forecast_service.clone());
    let response = controller.list_upcoming().await?;
    Ok(Json(response))
}
