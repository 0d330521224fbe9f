//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub historical: TableStatus,
    pub forecast: TableStatus,
}

/// Size and date range of a loaded table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatus {
    pub rows: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// Readiness check - are both tables loaded?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let historical = state.query_service.historical();
    let forecast = state.query_service.forecast();

    let ready = !historical.is_empty() && forecast.len() == state.model.horizon;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            historical: TableStatus {
                rows: historical.len(),
                first_date: historical.first_date(),
                last_date: historical.last_date(),
            },
            forecast: TableStatus {
                rows: forecast.len(),
                first_date: forecast.start_date(),
                last_date: forecast.end_date(),
            },
        }),
    )
}
