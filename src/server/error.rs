use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::error::NutriError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<NutriError> for AppError {
    fn from(err: NutriError) -> Self {
        match err {
            NutriError::MissingFields(fields) => AppError::MissingFields(fields),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingFields(ref fields) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string(), "missing_fields": fields })),
            )
                .into_response(),
            AppError::Internal(ref detail) => {
                error!("Recommendation error: {detail}");
                internal_error_response()
            }
        }
    }
}

/// Generic 500 body; internal details stay in the logs.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}
