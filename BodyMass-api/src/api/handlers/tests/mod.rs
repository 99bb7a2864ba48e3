// Handler tests drive the real router against a mock service

mod imc_test;
mod root_test;

use std::sync::{Arc, Once};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
    Router,
};
use body_mass_domain::testing::MockMeasurementService;
use tower::ServiceExt;

use crate::api::routes::create_app;

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per test binary
pub(crate) fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init();
    });
}

/// Build the router over a shared mock so tests can inspect it afterwards
pub(crate) fn app_with(mock: Arc<MockMeasurementService>) -> Router {
    init_tracing();
    create_app(mock)
}

/// Send a JSON request through the router
pub(crate) async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Send a request without a body
pub(crate) async fn send_empty(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON
pub(crate) async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
