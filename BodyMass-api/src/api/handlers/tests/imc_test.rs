use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use body_mass_domain::entities::measurement::MeasurementHistoryEntry;
use body_mass_domain::testing::MockMeasurementService;
use serde_json::json;
use tower::ServiceExt;

use super::{app_with, body_json, send_empty, send_json};

#[tokio::test]
async fn test_submit_returns_bare_bmi() {
    let mock = Arc::new(MockMeasurementService::new());

    let response = send_json(
        app_with(mock.clone()),
        Method::POST,
        "/imc/",
        json!({ "kg": 70.0, "height": 175.0, "created_at": "2024-01-05T14:30:00Z" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(22.86));
    assert_eq!(mock.len(), 1);
}

#[tokio::test]
async fn test_integer_inputs_are_accepted() {
    let mock = Arc::new(MockMeasurementService::new());

    let response = send_json(
        app_with(mock.clone()),
        Method::POST,
        "/imc/",
        json!({ "kg": 50, "height": 160, "created_at": "2024-01-05T14:30:00" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(19.53));
}

#[tokio::test]
async fn test_missing_created_at_is_rejected_with_detail() {
    let mock = Arc::new(MockMeasurementService::new());

    let response = send_json(app_with(mock.clone()), Method::POST, "/imc/", json!({ "kg": 70, "height": 175 })).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("created_at"));
    assert!(mock.is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_rejected_with_detail() {
    let mock = Arc::new(MockMeasurementService::new());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/imc/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"kg\": 70,"))
        .unwrap();

    let response = app_with(mock.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["detail"].is_string());
    assert!(mock.is_empty());
}

#[tokio::test]
async fn test_missing_content_type_is_rejected_with_detail() {
    let mock = Arc::new(MockMeasurementService::new());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/imc/")
        .body(Body::from(json!({ "kg": 70, "height": 175, "created_at": "2024-01-05T14:30:00" }).to_string()))
        .unwrap();

    let response = app_with(mock.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body_json(response).await["detail"].is_string());
}

#[tokio::test]
async fn test_non_finite_bmi_is_bad_request() {
    let mock = Arc::new(MockMeasurementService::new());

    let response = send_json(
        app_with(mock.clone()),
        Method::POST,
        "/imc/",
        json!({ "kg": 70, "height": 1e-200, "created_at": "2024-01-05T14:30:00" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "detail": "Weight and height do not produce a finite BMI" })
    );
    assert!(mock.is_empty());
}

#[tokio::test]
async fn test_zero_height_is_bad_request() {
    let mock = Arc::new(MockMeasurementService::new());

    let response = send_json(
        app_with(mock.clone()),
        Method::POST,
        "/imc/",
        json!({ "kg": 50.0, "height": 0.0, "created_at": "2024-01-05T14:30:00Z" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "detail": "Height cannot be zero" }));
    assert!(mock.is_empty());
}

#[tokio::test]
async fn test_units_are_applied() {
    let mock = Arc::new(MockMeasurementService::new());

    let response = send_json(
        app_with(mock.clone()),
        Method::POST,
        "/imc/",
        json!({ "kg": 100.0, "height": 2.0, "created_at": "2024-01-05T14:30:00", "weight_unit": "kg", "height_unit": "m" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(25.0));
}

#[tokio::test]
async fn test_unknown_unit_is_rejected_by_extractor() {
    let mock = Arc::new(MockMeasurementService::new());

    let response = send_json(
        app_with(mock.clone()),
        Method::POST,
        "/imc/",
        json!({ "kg": 70.0, "height": 175.0, "created_at": "2024-01-05T14:30:00", "height_unit": "inches" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(mock.is_empty());
}

#[tokio::test]
async fn test_unparseable_created_at_is_unprocessable() {
    let mock = Arc::new(MockMeasurementService::new());

    let response = send_json(
        app_with(mock.clone()),
        Method::POST,
        "/imc/",
        json!({ "kg": 70.0, "height": 175.0, "created_at": "not a date" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().starts_with("Invalid created_at"));
    assert!(mock.is_empty());
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let mock = Arc::new(MockMeasurementService::new());

    let response = send_json(app_with(mock.clone()), Method::POST, "/imc/", json!({ "kg": 70.0 })).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(mock.is_empty());
}

#[tokio::test]
async fn test_submit_storage_failure_is_internal_error() {
    let mock = Arc::new(MockMeasurementService::new().with_storage_failure());

    let response = send_json(app_with(mock), Method::POST, "/imc/", json!({ "kg": 70.0, "height": 175.0, "created_at": "2024-01-05T14:30:00" })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "detail": "Internal Server Error" }));
}

#[tokio::test]
async fn test_list_empty_history() {
    let mock = Arc::new(MockMeasurementService::new());

    let response = send_empty(app_with(mock), Method::GET, "/all_imc/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_list_returns_positional_rows() {
    let mock = Arc::new(MockMeasurementService::new().with_entries(vec![
        MeasurementHistoryEntry {
            id: 1,
            weight_kg: 70.0,
            height_cm: 175.0,
            bmi: 22.86,
            created_at: "05/01/2024 - 14:30".to_string(),
        },
        MeasurementHistoryEntry {
            id: 2,
            weight_kg: 80.0,
            height_cm: 175.0,
            bmi: 26.12,
            created_at: "06/01/2024 - 09:05".to_string(),
        },
    ]));

    let response = send_empty(app_with(mock), Method::GET, "/all_imc/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([
            [1, 70.0, 175.0, 22.86, "05/01/2024 - 14:30"],
            [2, 80.0, 175.0, 26.12, "06/01/2024 - 09:05"]
        ])
    );
}

#[tokio::test]
async fn test_submitted_measurement_appears_in_list() {
    let mock = Arc::new(MockMeasurementService::new());

    let response = send_json(app_with(mock.clone()), Method::POST, "/imc/", json!({ "kg": 70.0, "height": 175.0, "created_at": "2024-01-05T14:30:00" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send_empty(app_with(mock), Method::GET, "/all_imc/").await;
    let rows = body_json(response).await;
    let rows = rows.as_array().unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][3], json!(22.86));
}

#[tokio::test]
async fn test_list_parse_failure_is_internal_error() {
    let mock = Arc::new(MockMeasurementService::new().with_parse_failure());

    let response = send_empty(app_with(mock), Method::GET, "/all_imc/").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "detail": "Internal Server Error" }));
}
