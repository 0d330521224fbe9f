//! Application layer - Use cases and orchestration
//!
//! Contains the ARIMA forecaster, the forecast table builder, the query
//! service and the port through which historical data is loaded.
//! Orchestrates domain objects and infrastructure adapters.

pub mod date_parser;
pub mod error;
pub mod forecasting;
pub mod ports;
pub mod services;

pub use date_parser::parse_query_date;
pub use error::ApplicationError;
pub use forecasting::{ArimaModel, ArimaOrder, FittedArima, ModelFittingError, forecast_series};
pub use ports::*;
pub use services::*;
