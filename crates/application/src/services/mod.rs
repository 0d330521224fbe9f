//! Application services - Use case implementations

mod forecast_table_builder;
mod formatting;
mod query_service;

pub use forecast_table_builder::{FORECAST_HORIZON, ForecastTableBuilder};
pub use formatting::{LOOKUP_DATE_FORMAT, display_forecast_value, format_lookup_date};
pub use query_service::{LookupSource, WeatherLookup, WeatherQueryService};
