//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the CSV data source, configuration loading, logging setup and
//! the HTML template engine.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, DataConfig, Environment, ServerConfig};
pub use telemetry::{LogFormat, TelemetryError, init_logging};
pub use templates::{ForecastPageData, TemplateContext, TemplateEngine, TemplateError};
