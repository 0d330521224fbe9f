//! Date lookup handler

use application::WeatherLookup;
use axum::{Form, Json, extract::State};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Lookup form body
#[derive(Debug, Clone, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    pub date: Option<String>,
}

/// Look up weather for the submitted date
///
/// Historical dates return stored values; dates inside the forecast horizon
/// return converted forecast values.
#[instrument(skip(state))]
pub async fn view_data(
    State(state): State<AppState>,
    Form(form): Form<LookupForm>,
) -> Result<Json<WeatherLookup>, ApiError> {
    let raw = form
        .date
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing form field: date".to_string()))?;

    match state.query_service.lookup_str(raw)? {
        Some(found) => Ok(Json(found)),
        None => {
            debug!(date = raw, "No data for date");
            Err(ApiError::no_data())
        },
    }
}
