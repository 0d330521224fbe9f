//! Historical daily observations
//!
//! The historical table is keyed by date and holds raw values exactly as the
//! data source provided them. Nothing in this module converts units.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::WeatherVariable;

/// One day of observed weather
///
/// Absent fields were empty or unparseable in the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub tmin: Option<f64>,
    pub tmax: Option<f64>,
    pub prcp: Option<f64>,
    pub snow: Option<f64>,
    pub awnd: Option<f64>,
}

impl DailyObservation {
    /// Create an observation with every value absent
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            tmin: None,
            tmax: None,
            prcp: None,
            snow: None,
            awnd: None,
        }
    }

    /// Value of a single variable
    #[must_use]
    pub const fn value(&self, variable: WeatherVariable) -> Option<f64> {
        match variable {
            WeatherVariable::Tmin => self.tmin,
            WeatherVariable::Tmax => self.tmax,
            WeatherVariable::Prcp => self.prcp,
            WeatherVariable::Snow => self.snow,
            WeatherVariable::Awnd => self.awnd,
        }
    }

    /// Set a single variable
    pub fn set(&mut self, variable: WeatherVariable, value: Option<f64>) {
        let slot = match variable {
            WeatherVariable::Tmin => &mut self.tmin,
            WeatherVariable::Tmax => &mut self.tmax,
            WeatherVariable::Prcp => &mut self.prcp,
            WeatherVariable::Snow => &mut self.snow,
            WeatherVariable::Awnd => &mut self.awnd,
        };
        *slot = value;
    }
}

/// Dated values of one variable, strictly increasing by date
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalSeries {
    variable: WeatherVariable,
    points: Vec<(NaiveDate, f64)>,
}

impl HistoricalSeries {
    /// Variable this series carries
    #[must_use]
    pub const fn variable(&self) -> WeatherVariable {
        self.variable
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values in date order
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    /// Dated points in date order
    #[must_use]
    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    /// Date of the last point
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|(d, _)| *d)
    }
}

/// Historical observations keyed by date
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalTable {
    records: BTreeMap<NaiveDate, DailyObservation>,
}

impl HistoricalTable {
    /// Build a table from observations in any order
    ///
    /// When the same date appears more than once the last observation wins.
    pub fn from_observations(observations: impl IntoIterator<Item = DailyObservation>) -> Self {
        let records = observations
            .into_iter()
            .map(|obs| (obs.date, obs))
            .collect();
        Self { records }
    }

    /// Number of dated rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest date
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.keys().next().copied()
    }

    /// Latest date
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.keys().next_back().copied()
    }

    /// Observation recorded for a date
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyObservation> {
        self.records.get(&date)
    }

    /// Whether the table has a row for a date
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.records.contains_key(&date)
    }

    /// Observations in date order
    pub fn iter(&self) -> impl Iterator<Item = &DailyObservation> {
        self.records.values()
    }

    /// Series of one variable, skipping dates where it is absent
    #[must_use]
    pub fn series(&self, variable: WeatherVariable) -> HistoricalSeries {
        let points = self
            .records
            .values()
            .filter_map(|obs| obs.value(variable).map(|v| (obs.date, v)))
            .collect();
        HistoricalSeries { variable, points }
    }
}
