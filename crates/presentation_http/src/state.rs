//! Application state shared across handlers

use std::sync::Arc;

use application::{ArimaOrder, WeatherQueryService};
use domain::{ForecastTable, HistoricalTable};
use infrastructure::{AppConfig, TemplateEngine, TemplateError};

/// Model parameters the forecast table was built with
#[derive(Debug, Clone, Copy)]
pub struct ModelInfo {
    pub order: ArimaOrder,
    pub horizon: usize,
}

/// Shared application state
///
/// The tables are built before the listener binds and never change.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Lookup over historical and forecast tables
    pub query_service: Arc<WeatherQueryService>,
    /// Template engine for the HTML page
    pub templates: TemplateEngine,
    /// Model parameters
    pub model: ModelInfo,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Assemble state from prepared tables
    pub fn new(
        historical: HistoricalTable,
        forecast: ForecastTable,
        model: ModelInfo,
        config: AppConfig,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            query_service: Arc::new(WeatherQueryService::new(
                Arc::new(historical),
                Arc::new(forecast),
            )),
            templates: TemplateEngine::new()?,
            model,
            config: Arc::new(config),
        })
    }
}
