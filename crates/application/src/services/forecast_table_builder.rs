//! Forecast table construction
//!
//! Fits one model per weather variable on the historical table and
//! assembles the converted, rounded rows for the days after the last
//! observation.

use chrono::{Datelike, Days, NaiveDate};
use domain::{ForecastRecord, ForecastTable, HistoricalTable, WeatherVariable, month_name};
use tracing::{debug, info, instrument};

use super::formatting::display_forecast_value;
use crate::error::ApplicationError;
use crate::forecasting::{ArimaModel, ArimaOrder};
use crate::ports::HistoricalDataPort;

/// Number of days forecast past the last observation
pub const FORECAST_HORIZON: usize = 7;

/// Builds the forecast table from historical observations
#[derive(Debug, Clone, Copy)]
pub struct ForecastTableBuilder {
    order: ArimaOrder,
    horizon: usize,
}

impl Default for ForecastTableBuilder {
    fn default() -> Self {
        Self::new(ArimaOrder::DEFAULT, FORECAST_HORIZON)
    }
}

impl ForecastTableBuilder {
    #[must_use]
    pub const fn new(order: ArimaOrder, horizon: usize) -> Self {
        Self { order, horizon }
    }

    #[must_use]
    pub const fn order(&self) -> ArimaOrder {
        self.order
    }

    #[must_use]
    pub const fn horizon(&self) -> usize {
        self.horizon
    }

    /// Fit every variable and assemble the forecast table
    ///
    /// # Errors
    ///
    /// Fails without producing a partial table when the historical table is
    /// empty, a forecast date overflows, or any variable cannot be fitted.
    #[instrument(skip(self, historical), fields(rows = historical.len(), order = %self.order))]
    pub fn build(&self, historical: &HistoricalTable) -> Result<ForecastTable, ApplicationError> {
        if self.horizon == 0 {
            return Err(ApplicationError::InvalidInput(
                "forecast horizon must be at least one day".to_string(),
            ));
        }

        let last_date = historical.last_date().ok_or_else(|| {
            ApplicationError::DataSource("historical table has no rows".to_string())
        })?;
        let dates = self.horizon_dates(last_date)?;

        let mut columns: Vec<(WeatherVariable, Vec<f64>)> = Vec::with_capacity(5);
        for variable in WeatherVariable::ALL {
            let series = historical.series(variable);
            let fitted = ArimaModel::new(self.order)
                .fit(&series.values())
                .map_err(|e| ApplicationError::model_fitting(variable, e))?;

            debug!(
                variable = %variable,
                observations = fitted.n_obs(),
                coefficients = fitted.coefficients().len(),
                sigma2 = fitted.sigma2(),
                "Fitted variable"
            );

            let values = fitted
                .forecast(self.horizon)
                .into_iter()
                .map(|raw| display_forecast_value(variable, raw))
                .collect();
            columns.push((variable, values));
        }

        let mut rows = Vec::with_capacity(self.horizon);
        for (i, date) in dates.into_iter().enumerate() {
            let mut record = ForecastRecord {
                date,
                tmin: 0.0,
                tmax: 0.0,
                prcp: 0.0,
                snow: 0.0,
                awnd: 0.0,
                month_name: month_name(date.month())
                    .map_err(domain::DomainError::from)?
                    .to_string(),
            };
            for (variable, values) in &columns {
                let value = values.get(i).copied().ok_or_else(|| {
                    ApplicationError::Internal(format!("missing {variable} forecast for {date}"))
                })?;
                set_value(&mut record, *variable, value);
            }
            rows.push(record);
        }

        let table = ForecastTable::new(rows)?;
        info!(
            start = ?table.start_date(),
            end = ?table.end_date(),
            rows = table.len(),
            "Built forecast table"
        );
        Ok(table)
    }

    /// Load historical data through a port and build the forecast table
    ///
    /// # Errors
    ///
    /// Propagates loading failures and any error from [`Self::build`].
    pub fn prepare(
        &self,
        source: &dyn HistoricalDataPort,
    ) -> Result<(HistoricalTable, ForecastTable), ApplicationError> {
        let description = source.describe();
        info!(kind = description.kind, location = %description.location, "Loading historical data");

        let historical = source.load()?;
        let forecast = self.build(&historical)?;
        Ok((historical, forecast))
    }

    fn horizon_dates(&self, last_date: NaiveDate) -> Result<Vec<NaiveDate>, ApplicationError> {
        (1..=self.horizon as u64)
            .map(|offset| {
                last_date.checked_add_days(Days::new(offset)).ok_or_else(|| {
                    ApplicationError::Domain(domain::DomainError::InvalidDate(format!(
                        "{last_date} plus {offset} days is out of range"
                    )))
                })
            })
            .collect()
    }
}

const fn set_value(record: &mut ForecastRecord, variable: WeatherVariable, value: f64) {
    match variable {
        WeatherVariable::Tmin => record.tmin = value,
        WeatherVariable::Tmax => record.tmax = value,
        WeatherVariable::Prcp => record.prcp = value,
        WeatherVariable::Snow => record.snow = value,
        WeatherVariable::Awnd => record.awnd = value,
    }
}
