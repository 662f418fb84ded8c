use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Unified application error.
///
/// Every layer (config, database, static files) fails through this type so
/// handlers can return it directly and get a generic 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Body sent for every 500. Details stay in the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
        )
            .into_response()
    }
}
