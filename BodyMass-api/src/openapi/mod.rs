use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Liveness
        crate::api::handlers::root::root,

        // BMI endpoints
        crate::api::handlers::imc::submit_measurement,
        crate::api::handlers::imc::list_measurements
    ),
    components(
        schemas(
            crate::entities::measurement::SubmitMeasurementRequest,
            crate::entities::common::ErrorDetail,
            crate::entities::common::RootMessage
        )
    ),
    tags(
        (name = "health", description = "Liveness endpoint"),
        (name = "imc", description = "BMI calculation and history")
    ),
    info(
        title = "BodyMass API",
        version = "0.1.0",
        description = "Computes body mass index and keeps a history of measurements",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
