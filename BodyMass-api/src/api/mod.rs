pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;


use axum::Router;
use tracing::info;

use crate::config::AppConfig;

pub use error::ApiError;
pub use routes::create_app;

/// Create the application router backed by the configured SQLite store
pub fn create_application(config: &AppConfig) -> Router {
    info!("Using SQLite database at {}", config.storage.sqlite_path.display());
    let service = handlers::create_service(config.storage.clone());
    create_app(service)
}
