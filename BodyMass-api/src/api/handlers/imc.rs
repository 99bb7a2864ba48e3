use std::sync::Arc;
use axum::{extract::State, Json};
use tracing::{debug, info, instrument, warn};

// Import domain entities and services
use body_mass_domain::database::StorageConfig;
use body_mass_domain::date_format::parse_timestamp;
use body_mass_domain::entities::measurement::MeasurementSubmission;
use body_mass_domain::services::{create_measurement_service, MeasurementServiceTrait};

// Import our entities
use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::entities::measurement::{MeasurementRow, SubmitMeasurementRequest};

/// Service type for dependency injection
pub type MeasurementService = Arc<dyn MeasurementServiceTrait + Send + Sync>;

/// Create the SQLite-backed service for the handlers to use
pub fn create_service(config: StorageConfig) -> MeasurementService {
    Arc::new(create_measurement_service(config))
}

/// Submit a weight/height pair and get its BMI back
#[utoipa::path(
    post,
    path = "/imc/",
    request_body = SubmitMeasurementRequest,
    responses(
        (status = 200, description = "BMI of the stored measurement, rounded to two decimals", body = f64),
        (status = 400, description = "Height is zero, the BMI is not finite, or the body is not JSON", body = ErrorDetail),
        (status = 415, description = "Missing JSON content type", body = ErrorDetail),
        (status = 422, description = "A field is missing or created_at is not a date-time", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail),
    ),
    tag = "imc"
)]
#[instrument(skip(service, request))]
pub async fn submit_measurement(
    State(service): State<MeasurementService>,
    ApiJson(request): ApiJson<SubmitMeasurementRequest>,
) -> Result<Json<f64>, ApiError> {
    info!("Submitting measurement");

    let submission = convert_to_domain_submission(request)?;

    let bmi = service.submit_measurement(submission).await.map_err(|e| {
        warn!("Measurement rejected: {}", e);
        ApiError::from(e)
    })?;

    info!("Measurement stored with BMI {}", bmi);
    Ok(Json(bmi))
}

/// List every stored measurement, oldest first
#[utoipa::path(
    get,
    path = "/all_imc/",
    responses(
        (status = 200, description = "Array of [id, kg, height, bmi, \"DD/MM/YYYY - HH:MM\"] rows", content_type = "application/json"),
        (status = 500, description = "Internal server error", body = ErrorDetail),
    ),
    tag = "imc"
)]
#[instrument(skip(service))]
pub async fn list_measurements(
    State(service): State<MeasurementService>,
) -> Result<Json<Vec<MeasurementRow>>, ApiError> {
    debug!("Listing measurements");

    let entries = service.list_measurements().await?;
    info!("Returning {} measurements", entries.len());

    Ok(Json(entries.into_iter().map(|entry| entry.into_tuple()).collect()))
}

/// Convert the public request into a domain submission.
///
/// `created_at` must parse, but its value is not kept.
pub fn convert_to_domain_submission(request: SubmitMeasurementRequest) -> Result<MeasurementSubmission, ApiError> {
    let client_created_at = parse_timestamp(&request.created_at)
        .map_err(|e| ApiError::Unprocessable(format!("Invalid created_at: {}", e)))?;
    debug!("Client created_at {} ignored", client_created_at);

    Ok(MeasurementSubmission {
        weight: request.kg,
        weight_unit: request.weight_unit.unwrap_or_default(),
        height: request.height,
        height_unit: request.height_unit.unwrap_or_default(),
        client_created_at: Some(client_created_at),
    })
}
