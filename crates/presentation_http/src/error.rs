//! API error handling
//!
//! Every error leaves as JSON `{error, code}`. Internal errors carry their
//! message in `details` only in debug builds.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use infrastructure::TemplateError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when a date has neither historical nor forecast data
pub const NO_DATA_MESSAGE: &str = "No data available for this date.";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Lookup miss
    pub fn no_data() -> Self {
        Self::NotFound(NO_DATA_MESSAGE.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                let details = cfg!(debug_assertions).then_some(msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    details,
                )
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidInput(msg) => Self::BadRequest(msg),
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            e @ (ApplicationError::ModelFitting { .. }
            | ApplicationError::DataSource(_)
            | ApplicationError::Internal(_)) => Self::Internal(e.to_string()),
        }
    }
}

impl From<TemplateError> for ApiError {
    fn from(err: TemplateError) -> Self {
        Self::Internal(err.to_string())
    }
}
