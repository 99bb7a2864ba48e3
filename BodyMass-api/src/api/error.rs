use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use body_mass_domain::services::MeasurementServiceError;

use crate::entities::common::ErrorDetail;

/// Detail sent for every failure that is not the client's fault
pub const INTERNAL_ERROR_DETAIL: &str = "Internal Server Error";

/// Errors returned by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was understood but rejected
    #[error("{0}")]
    BadRequest(String),

    /// The request body holds a value that cannot be interpreted
    #[error("{0}")]
    Unprocessable(String),

    /// The body could not be read as the expected JSON document
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },

    /// Anything else; the cause is logged, never returned
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Status code this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MeasurementServiceError> for ApiError {
    fn from(err: MeasurementServiceError) -> Self {
        match err {
            MeasurementServiceError::InvalidInput(message) => ApiError::BadRequest(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::BadRequest(message) | ApiError::Unprocessable(message) => message,
            ApiError::Rejected { detail, .. } => detail,
            ApiError::Internal(cause) => {
                error!("Request failed: {}", cause);
                INTERNAL_ERROR_DETAIL.to_string()
            }
        };

        (status, Json(ErrorDetail { detail })).into_response()
    }
}
