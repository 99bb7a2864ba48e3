use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{imc, root, MeasurementService};
use crate::openapi::configure_swagger_routes;

/// Create the application router around an already built service
pub fn create_app(service: MeasurementService) -> Router {
    debug!("Creating application router");

    let app = Router::new()
        .route("/", get(root::root))
        .route("/imc/", post(imc::submit_measurement))
        .route("/all_imc/", get(imc::list_measurements))
        .with_state(service);

    debug!("Measurement routes configured");

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    app.layer(permissive_cors()).layer(TraceLayer::new_for_http())
}

/// Cross-origin policy that admits any origin, method and header with credentials.
///
/// Browsers reject `*` when credentials are allowed, so the request's own
/// origin, method and headers are echoed back instead.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    // Get Swagger UI routes
    let swagger = configure_swagger_routes();

    // Merge Swagger UI with the app router
    app.merge(swagger)
}
