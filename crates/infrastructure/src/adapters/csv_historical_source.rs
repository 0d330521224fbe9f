//! CSV adapter for historical observations
//!
//! Reads GHCN-daily style exports: a `DATE` column plus any of `TMIN`,
//! `TMAX`, `PRCP`, `SNOW` and `AWND`. Other columns are ignored. Dates are
//! read day-first, falling back to month-first when the day-first reading
//! is impossible (`1/15/2024`). Rows whose date cannot be parsed are
//! dropped with a warning, and empty or non-numeric cells become absent
//! values.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::{HistoricalDataPort, SourceDescription};
use chrono::NaiveDate;
use domain::{DailyObservation, HistoricalTable, WeatherVariable};
use thiserror::Error;
use tracing::{info, warn};

/// Name of the date column
const DATE_COLUMN: &str = "DATE";

/// Accepted date layouts, day before month
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%d.%m.%Y"];

/// Month-first layouts, tried only when no day-first layout fits
const MONTH_FIRST_FORMATS: [&str; 3] = ["%m/%d/%Y", "%m-%d-%Y", "%m.%d.%Y"];

/// Errors raised while reading the CSV file
#[derive(Debug, Error)]
pub enum CsvSourceError {
    /// File could not be opened
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks the date column
    #[error("missing DATE column")]
    MissingDateColumn,

    /// No row had a parseable date
    #[error("no rows with a valid date")]
    NoValidRows,
}

impl From<CsvSourceError> for ApplicationError {
    fn from(e: CsvSourceError) -> Self {
        Self::DataSource(e.to_string())
    }
}

/// Parse a date cell, day-first with a month-first fallback
#[must_use]
pub fn parse_observation_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .chain(MONTH_FIRST_FORMATS.iter())
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Historical data source backed by a CSV file
#[derive(Debug, Clone)]
pub struct CsvHistoricalSource {
    path: PathBuf,
}

impl CsvHistoricalSource {
    /// Create a source for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the CSV file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole file
    pub fn read(&self) -> Result<HistoricalTable, CsvSourceError> {
        let file = File::open(&self.path).map_err(|source| CsvSourceError::Open {
            path: self.path.clone(),
            source,
        })?;
        let table = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %self.path.display(),
            rows = table.len(),
            first = ?table.first_date(),
            last = ?table.last_date(),
            "Loaded historical observations"
        );
        Ok(table)
    }

    /// Parse observations from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<HistoricalTable, CsvSourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let date_idx = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(DATE_COLUMN))
            .ok_or(CsvSourceError::MissingDateColumn)?;

        let columns: Vec<(WeatherVariable, usize)> = WeatherVariable::ALL
            .into_iter()
            .filter_map(|variable| {
                let idx = headers
                    .iter()
                    .position(|h| WeatherVariable::from_column(h) == Some(variable));
                if idx.is_none() {
                    warn!(column = variable.column(), "Column missing; values treated as absent");
                }
                idx.map(|i| (variable, i))
            })
            .collect();

        let mut observations = Vec::new();
        let mut dropped = 0usize;
        for result in reader.records() {
            let record = result?;
            let Some(date) = record.get(date_idx).and_then(parse_observation_date) else {
                dropped += 1;
                continue;
            };

            let mut obs = DailyObservation::empty(date);
            for (variable, idx) in &columns {
                let value = record
                    .get(*idx)
                    .and_then(|cell| cell.parse::<f64>().ok())
                    .filter(|v| v.is_finite());
                obs.set(*variable, value);
            }
            observations.push(obs);
        }

        if dropped > 0 {
            warn!(dropped, kept = observations.len(), "Dropped rows with unparseable dates");
        }

        let table = HistoricalTable::from_observations(observations);
        if table.is_empty() {
            return Err(CsvSourceError::NoValidRows);
        }
        Ok(table)
    }
}

impl HistoricalDataPort for CsvHistoricalSource {
    fn load(&self) -> Result<HistoricalTable, ApplicationError> {
        self.read().map_err(ApplicationError::from)
    }

    fn describe(&self) -> SourceDescription {
        SourceDescription {
            kind: "csv",
            location: self.path.display().to_string(),
        }
    }
}
