//! Univariate forecasting
//!
//! One ARIMA(p, d, 0) model per weather variable, fitted by conditional
//! least squares and projected a fixed number of days ahead.

mod arima;
mod error;
mod least_squares;

pub use arima::{ArimaModel, ArimaOrder, FittedArima};
pub use error::ModelFittingError;

/// Fit `order` to `values` and project `horizon` steps ahead
///
/// # Errors
///
/// Returns a `ModelFittingError` when the series is too short, contains
/// non-finite values, or is too degenerate to identify the AR coefficients.
pub fn forecast_series(
    values: &[f64],
    order: ArimaOrder,
    horizon: usize,
) -> Result<Vec<f64>, ModelFittingError> {
    let fitted = ArimaModel::new(order).fit(values)?;
    Ok(fitted.forecast(horizon))
}
