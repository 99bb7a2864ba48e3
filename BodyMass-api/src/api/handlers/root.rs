use axum::Json;
use tracing::{debug, instrument};

use crate::entities::common::RootMessage;

/// Greeting returned by `GET /`
pub const ROOT_MESSAGE: &str = "Hello World";

/// Root endpoint used as a liveness probe
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is running", body = RootMessage)
    ),
    tag = "health"
)]
#[instrument]
pub async fn root() -> Json<RootMessage> {
    debug!("Root endpoint called");
    Json(RootMessage {
        message: ROOT_MESSAGE.to_string(),
    })
}
