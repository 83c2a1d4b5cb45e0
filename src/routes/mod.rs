pub mod maintenance_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::middleware::cors_middleware;
use crate::state::AppState;

/// Router completo de la aplicación con sus capas
pub fn create_app(state: AppState) -> Router {
    let timeout = state.config.request_timeout;
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/maintenance", maintenance_routes::create_maintenance_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de salud simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleet-maintenance",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
