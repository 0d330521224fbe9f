//! Weather lookup by date
//!
//! Historical records take precedence over forecast rows. Historical values
//! are returned as stored; forecast values are already converted and
//! rounded. The `source` field tells callers which one they got.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use domain::{DailyObservation, ForecastRecord, ForecastTable, HistoricalTable};
use serde::Serialize;
use tracing::{debug, instrument};

use super::formatting::format_lookup_date;
use crate::date_parser::parse_query_date;
use crate::error::ApplicationError;

/// Table a lookup was answered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupSource {
    Historical,
    Forecast,
}

impl fmt::Display for LookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Historical => write!(f, "historical"),
            Self::Forecast => write!(f, "forecast"),
        }
    }
}

/// Result of a successful lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherLookup {
    /// Formatted date, see [`format_lookup_date`]
    pub date: String,
    /// Calendar date that was looked up
    #[serde(skip)]
    pub query_date: NaiveDate,
    pub source: LookupSource,
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
    #[serde(rename = "PRCP")]
    pub prcp: Option<f64>,
    #[serde(rename = "SNOW")]
    pub snow: Option<f64>,
    #[serde(rename = "AWND")]
    pub awnd: Option<f64>,
}

impl WeatherLookup {
    fn from_historical(obs: &DailyObservation) -> Self {
        Self {
            date: format_lookup_date(obs.date),
            query_date: obs.date,
            source: LookupSource::Historical,
            tmin: obs.tmin,
            tmax: obs.tmax,
            prcp: obs.prcp,
            snow: obs.snow,
            awnd: obs.awnd,
        }
    }

    fn from_forecast(row: &ForecastRecord) -> Self {
        Self {
            date: format_lookup_date(row.date),
            query_date: row.date,
            source: LookupSource::Forecast,
            tmin: Some(row.tmin),
            tmax: Some(row.tmax),
            prcp: Some(row.prcp),
            snow: Some(row.snow),
            awnd: Some(row.awnd),
        }
    }
}

/// Read-only lookup over the historical and forecast tables
#[derive(Debug, Clone)]
pub struct WeatherQueryService {
    historical: Arc<HistoricalTable>,
    forecast: Arc<ForecastTable>,
}

impl WeatherQueryService {
    #[must_use]
    pub const fn new(historical: Arc<HistoricalTable>, forecast: Arc<ForecastTable>) -> Self {
        Self {
            historical,
            forecast,
        }
    }

    #[must_use]
    pub fn historical(&self) -> &HistoricalTable {
        &self.historical
    }

    #[must_use]
    pub fn forecast(&self) -> &ForecastTable {
        &self.forecast
    }

    /// Look up a calendar date
    #[must_use]
    pub fn lookup(&self, date: NaiveDate) -> Option<WeatherLookup> {
        let found = self
            .historical
            .get(date)
            .map(WeatherLookup::from_historical)
            .or_else(|| self.forecast.get(date).map(WeatherLookup::from_forecast));

        match &found {
            Some(lookup) => debug!(%date, source = %lookup.source, "Lookup hit"),
            None => debug!(%date, "Lookup miss"),
        }
        found
    }

    /// Parse a user-supplied date and look it up
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidInput` when the date cannot be
    /// parsed. A well-formed date with no data is `Ok(None)`.
    #[instrument(skip(self))]
    pub fn lookup_str(&self, input: &str) -> Result<Option<WeatherLookup>, ApplicationError> {
        let date = parse_query_date(input)
            .ok_or_else(|| ApplicationError::InvalidInput(format!("unrecognized date: {input:?}")))?;
        Ok(self.lookup(date))
    }
}
