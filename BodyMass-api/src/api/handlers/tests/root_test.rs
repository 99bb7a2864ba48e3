use std::sync::Arc;

use axum::http::{Method, StatusCode};
use body_mass_domain::testing::MockMeasurementService;
use serde_json::json;

use super::{app_with, body_json, send_empty};

#[tokio::test]
async fn test_root_returns_hello_world() {
    let response = send_empty(app_with(Arc::new(MockMeasurementService::new())), Method::GET, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "Hello World" }));
}

#[tokio::test]
async fn test_root_does_not_touch_storage() {
    let mock = Arc::new(MockMeasurementService::new().with_storage_failure());

    let response = send_empty(app_with(mock), Method::GET, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = send_empty(app_with(Arc::new(MockMeasurementService::new())), Method::GET, "/imc").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
