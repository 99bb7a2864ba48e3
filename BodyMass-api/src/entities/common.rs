use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for rejected or failed requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Human-readable error message
    #[schema(example = "Height cannot be zero")]
    pub detail: String,
}

/// Greeting returned by the root route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RootMessage {
    /// Fixed greeting
    #[schema(example = "Hello World")]
    pub message: String,
}
