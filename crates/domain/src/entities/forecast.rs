//! Forecast table
//!
//! Rows hold converted and rounded values ready for display. The table
//! checks on construction that its dates form one contiguous daily run.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::WeatherVariable;

/// One forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ForecastRecord {
    pub date: NaiveDate,
    pub tmin: f64,
    pub tmax: f64,
    pub prcp: f64,
    pub snow: f64,
    pub awnd: f64,
    pub month_name: String,
}

impl ForecastRecord {
    /// Value of a single variable
    #[must_use]
    pub const fn value(&self, variable: WeatherVariable) -> f64 {
        match variable {
            WeatherVariable::Tmin => self.tmin,
            WeatherVariable::Tmax => self.tmax,
            WeatherVariable::Prcp => self.prcp,
            WeatherVariable::Snow => self.snow,
            WeatherVariable::Awnd => self.awnd,
        }
    }
}

/// Forecast rows over consecutive days
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastTable {
    rows: Vec<ForecastRecord>,
}

impl ForecastTable {
    /// Build a table, validating that dates are contiguous and increasing
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` for an empty row set or a gap,
    /// repeat or reversal between consecutive dates.
    pub fn new(rows: Vec<ForecastRecord>) -> Result<Self, DomainError> {
        if rows.is_empty() {
            return Err(DomainError::ValidationError(
                "forecast table must have at least one row".to_string(),
            ));
        }

        for pair in rows.windows(2) {
            let expected = pair[0].date.checked_add_days(Days::new(1));
            if expected != Some(pair[1].date) {
                return Err(DomainError::ValidationError(format!(
                    "forecast dates must be contiguous: {} is followed by {}",
                    pair[0].date, pair[1].date
                )));
            }
        }

        Ok(Self { rows })
    }

    /// Rows in date order
    #[must_use]
    pub fn rows(&self) -> &[ForecastRecord] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a constructed table
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First forecast date
    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    /// Last forecast date
    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }

    /// Row for a date, if it falls inside the horizon
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&ForecastRecord> {
        let start = self.start_date()?;
        let offset = usize::try_from(date.signed_duration_since(start).num_days()).ok()?;
        self.rows.get(offset)
    }

    /// Rows in date order
    pub fn iter(&self) -> impl Iterator<Item = &ForecastRecord> {
        self.rows.iter()
    }
}
