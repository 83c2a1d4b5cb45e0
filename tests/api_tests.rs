use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use fleet_maintenance::config::{EnvironmentConfig, ForecastPolicy, UrgencyThresholds};
use fleet_maintenance::models::mileage::NewMileageLog;
use fleet_maintenance::models::vehicle::{Vehicle, VehicleStatus, VehicleType};
use fleet_maintenance::repositories::{FleetRepository, InMemoryFleetRepository};
use fleet_maintenance::{create_app, AppState};

fn vehicle(reg: &str, current: i64, status: VehicleStatus) -> Vehicle {
    Vehicle {
        id: Uuid::new_v4(),
        brand: "MAN".to_string(),
        model: "TGS".to_string(),
        reg_number: reg.to_string(),
        vin: "WMA06XZZ9HM123456".to_string(),
        vehicle_type: VehicleType::Truck,
        initial_mileage: 0,
        current_mileage: current,
        status,
        created_at: Utc::now(),
    }
}

fn create_test_app(repo: Arc<InMemoryFleetRepository>) -> Router {
    let state = AppState::new(
        repo,
        EnvironmentConfig::default(),
        ForecastPolicy::default(),
        UrgencyThresholds::default(),
    );
    create_app(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app(Arc::new(InMemoryFleetRepository::new()));
    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "fleet-maintenance");
}

#[tokio::test]
async fn test_prediction_for_unknown_vehicle_is_404() {
    let app = create_test_app(Arc::new(InMemoryFleetRepository::new()));
    let uri = format!("/api/vehicles/{}/prediction", Uuid::new_v4());
    let (status, body) = send(app, get(&uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_urgency_for_unknown_vehicle_is_unknown() {
    let app = create_test_app(Arc::new(InMemoryFleetRepository::new()));
    let uri = format!("/api/vehicles/{}/urgency", Uuid::new_v4());
    let (status, body) = send(app, get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["urgency"], "unknown");
}

#[tokio::test]
async fn test_prediction_payload() {
    let repo = Arc::new(InMemoryFleetRepository::new());
    let truck = vehicle("A001AA77", 7_000, VehicleStatus::Active);
    repo.insert_vehicle(truck.clone()).await;

    let today = Utc::now().date_naive();
    repo.record_mileage(truck.id, NewMileageLog::new(today - Duration::days(8), 6_000))
        .await
        .unwrap();
    repo.record_mileage(truck.id, NewMileageLog::new(today, 7_000)).await.unwrap();

    let app = create_test_app(repo);
    let uri = format!("/api/vehicles/{}/prediction", truck.id);
    let (status, body) = send(app, get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicle_id"], truck.id.to_string());
    assert_eq!(body["daily_mileage"], 125.0);
    assert_eq!(body["forecast"]["is_overdue"], false);
    assert_eq!(body["forecast"]["predicted_mileage"], 10_000);
    assert_eq!(body["forecast"]["km_remaining"], 3_000);
    assert_eq!(body["forecast"]["days_remaining"], 24);
    assert_eq!(body["urgency"], "warning");
}

#[tokio::test]
async fn test_upcoming_lists_active_fleet() {
    let repo = Arc::new(InMemoryFleetRepository::new());
    let overdue = vehicle("B002BB77", 10_500, VehicleStatus::Active);
    let fresh = vehicle("C003CC77", 1_000, VehicleStatus::Active);
    let parked = vehicle("D004DD77", 500, VehicleStatus::Inactive);
    for v in [&overdue, &fresh, &parked] {
        repo.insert_vehicle(v.clone()).await;
    }

    let app = create_test_app(repo);
    let (status, body) = send(app, get("/api/maintenance/upcoming")).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["vehicle"]["id"], overdue.id.to_string());
    assert_eq!(items[0]["urgency"], "overdue");
    assert_eq!(items[1]["vehicle"]["id"], fresh.id.to_string());
    assert_eq!(items[1]["forecast"]["days_remaining"], 180);
}

#[tokio::test]
async fn test_record_mileage_updates_vehicle() {
    let repo = Arc::new(InMemoryFleetRepository::new());
    let truck = vehicle("E005EE77", 12_000, VehicleStatus::Active);
    repo.insert_vehicle(truck.clone()).await;

    let app = create_test_app(repo.clone());
    let uri = format!("/api/vehicles/{}/mileage", truck.id);
    let payload = json!({
        "date": Utc::now().date_naive().to_string(),
        "mileage": 12_450,
        "driver": "Petrov",
    });
    let (status, body) = send(app.clone(), post_json(&uri, &payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["mileage"], 12_450);
    assert_eq!(body["data"]["driver"], "Petrov");

    let stored = repo.find_vehicle(truck.id).await.unwrap().unwrap();
    assert_eq!(stored.current_mileage, 12_450);

    let (status, body) = send(app, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_lower_reading_does_not_lower_current_mileage() {
    let repo = Arc::new(InMemoryFleetRepository::new());
    let truck = vehicle("F006FF77", 12_000, VehicleStatus::Active);
    repo.insert_vehicle(truck.clone()).await;

    let app = create_test_app(repo.clone());
    let uri = format!("/api/vehicles/{}/mileage", truck.id);
    let payload = json!({ "date": "2024-01-15", "mileage": 11_000 });
    let (status, _) = send(app, post_json(&uri, &payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    let stored = repo.find_vehicle(truck.id).await.unwrap().unwrap();
    assert_eq!(stored.current_mileage, 12_000);
}

#[tokio::test]
async fn test_negative_mileage_is_rejected() {
    let repo = Arc::new(InMemoryFleetRepository::new());
    let truck = vehicle("G007GG77", 12_000, VehicleStatus::Active);
    repo.insert_vehicle(truck.clone()).await;

    let app = create_test_app(repo.clone());
    let uri = format!("/api/vehicles/{}/mileage", truck.id);
    let payload = json!({ "date": "2024-01-15", "mileage": -10 });
    let (status, body) = send(app, post_json(&uri, &payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(repo.list_recent_mileage_logs(truck.id, 30).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_mileage_for_unknown_vehicle_is_404() {
    let app = create_test_app(Arc::new(InMemoryFleetRepository::new()));
    let uri = format!("/api/vehicles/{}/mileage", Uuid::new_v4());

    let (status, _) = send(app.clone(), get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let payload = json!({ "date": "2024-01-15", "mileage": 100 });
    let (status, _) = send(app, post_json(&uri, &payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
