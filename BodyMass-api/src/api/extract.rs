use axum::extract::FromRequest;

use crate::api::error::ApiError;

/// `axum::Json` whose rejections are reported as `{"detail": ...}`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
