//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod csv_historical_source;

pub use csv_historical_source::{CsvHistoricalSource, CsvSourceError, parse_observation_date};
