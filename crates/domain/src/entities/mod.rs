//! Domain entities - the historical and forecast tables

mod forecast;
mod observation;

pub use forecast::{ForecastRecord, ForecastTable};
pub use observation::{DailyObservation, HistoricalSeries, HistoricalTable};
