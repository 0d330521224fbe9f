//! Forecast page and table handlers

use application::ArimaOrder;
use axum::{Json, extract::State, response::Html};
use domain::ForecastRecord;
use infrastructure::ForecastPageData;
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Forecast table response
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    pub order: ArimaOrder,
    pub horizon: usize,
    pub rows: Vec<ForecastRecord>,
}

/// Render the forecast page
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let data = ForecastPageData {
        rows: state.query_service.forecast().rows().to_vec(),
        last_observation: state
            .query_service
            .historical()
            .last_date()
            .map(|d| d.to_string()),
    };
    let html = state.templates.render_forecast_page(&data)?;
    Ok(Html(html))
}

/// Forecast rows as JSON
#[instrument(skip(state))]
pub async fn forecast_table(State(state): State<AppState>) -> Json<ForecastResponse> {
    Json(ForecastResponse {
        order: state.model.order,
        horizon: state.model.horizon,
        rows: state.query_service.forecast().rows().to_vec(),
    })
}
