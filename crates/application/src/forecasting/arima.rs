//! ARIMA(p, d, 0) fitting and projection
//!
//! The series is differenced `d` times, an AR(p) regression without
//! intercept is fitted to the differenced values by least squares, and
//! forecasts are integrated back to the original scale. The procedure has
//! no random component: identical input yields identical output.

use std::fmt;

use nalgebra::{DMatrix, DVector};
use serde::Serialize;
use tracing::debug;

use super::error::ModelFittingError;
use super::least_squares::solve_least_squares;

/// Model order: AR lags, differencing degree and MA lags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArimaOrder {
    pub p: usize,
    pub d: usize,
    pub q: usize,
}

impl ArimaOrder {
    /// ARIMA(5, 1, 0)
    pub const DEFAULT: Self = Self { p: 5, d: 1, q: 0 };

    #[must_use]
    pub const fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Shortest series this order can be fitted to
    ///
    /// At least one regression row must remain after differencing and
    /// lagging, and there must be no fewer rows than coefficients.
    #[must_use]
    pub const fn min_observations(&self) -> usize {
        let one_row = self.p + self.d + 1;
        let square = self.d + 2 * self.p;
        if one_row > square { one_row } else { square }
    }
}

impl Default for ArimaOrder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARIMA({},{},{})", self.p, self.d, self.q)
    }
}

/// Unfitted model of a given order
#[derive(Debug, Clone, Copy, Default)]
pub struct ArimaModel {
    order: ArimaOrder,
}

impl ArimaModel {
    #[must_use]
    pub const fn new(order: ArimaOrder) -> Self {
        Self { order }
    }

    #[must_use]
    pub const fn order(&self) -> ArimaOrder {
        self.order
    }

    /// Fit the model to a series in time order
    ///
    /// # Errors
    ///
    /// - `UnsupportedOrder` when `q > 0`
    /// - `NonFiniteValue` for NaN or infinite input
    /// - `InsufficientData` when the series is shorter than
    ///   [`ArimaOrder::min_observations`]
    /// - `SingularDesign` when the lag matrix is rank deficient, which covers
    ///   constant, all-zero and linear series
    pub fn fit(&self, values: &[f64]) -> Result<FittedArima, ModelFittingError> {
        let ArimaOrder { p, d, q } = self.order;

        if q != 0 {
            return Err(ModelFittingError::UnsupportedOrder { q });
        }

        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ModelFittingError::NonFiniteValue { index });
        }

        let required = self.order.min_observations();
        if values.len() < required {
            return Err(ModelFittingError::InsufficientData {
                required,
                actual: values.len(),
            });
        }

        let mut level_tails = Vec::with_capacity(d);
        let mut working = values.to_vec();
        for _ in 0..d {
            let last = working
                .last()
                .copied()
                .ok_or(ModelFittingError::InsufficientData {
                    required,
                    actual: values.len(),
                })?;
            level_tails.push(last);
            working = difference(&working);
        }

        let (coefficients, sigma2) = if p == 0 {
            let sigma2 = working.iter().map(|w| w * w).sum::<f64>() / working.len() as f64;
            (Vec::new(), sigma2)
        } else {
            fit_autoregression(&working, p)?
        };

        let tail_start = working.len().saturating_sub(p);
        let differenced_tail = working[tail_start..].to_vec();

        debug!(
            order = %self.order,
            observations = values.len(),
            ?coefficients,
            sigma2,
            "Fitted ARIMA model"
        );

        Ok(FittedArima {
            order: self.order,
            coefficients,
            sigma2,
            n_obs: values.len(),
            differenced_tail,
            level_tails,
        })
    }
}

/// Regress `w[t]` on `w[t-1] .. w[t-p]`, returning coefficients and
/// residual variance.
fn fit_autoregression(w: &[f64], p: usize) -> Result<(Vec<f64>, f64), ModelFittingError> {
    let rows = w.len() - p;
    let x = DMatrix::from_fn(rows, p, |r, j| w[p + r - 1 - j]);
    let y = DVector::from_fn(rows, |r, _| w[p + r]);

    let beta = solve_least_squares(&x, &y)?;
    let residuals = &y - &x * &beta;
    let sigma2 = residuals.norm_squared() / rows as f64;

    Ok((beta.iter().copied().collect(), sigma2))
}

/// First difference of a series
fn difference(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Fitted ARIMA model, ready to project forward
#[derive(Debug, Clone, PartialEq)]
pub struct FittedArima {
    order: ArimaOrder,
    coefficients: Vec<f64>,
    sigma2: f64,
    n_obs: usize,
    /// Last `p` values of the differenced series, oldest first
    differenced_tail: Vec<f64>,
    /// Last value at each differencing level, original series first
    level_tails: Vec<f64>,
}

impl FittedArima {
    #[must_use]
    pub const fn order(&self) -> ArimaOrder {
        self.order
    }

    /// AR coefficients, lag 1 first
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Residual variance of the regression
    #[must_use]
    pub const fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Number of observations the model was fitted to
    #[must_use]
    pub const fn n_obs(&self) -> usize {
        self.n_obs
    }

    /// Point forecasts for the next `steps` periods
    #[must_use]
    pub fn forecast(&self, steps: usize) -> Vec<f64> {
        let mut history = self.differenced_tail.clone();
        let mut levels = self.level_tails.clone();
        let mut out = Vec::with_capacity(steps);

        for _ in 0..steps {
            let next: f64 = self
                .coefficients
                .iter()
                .enumerate()
                .map(|(lag, phi)| phi * history[history.len() - 1 - lag])
                .sum();
            history.push(next);

            let mut value = next;
            for level in levels.iter_mut().rev() {
                *level += value;
                value = *level;
            }
            out.push(value);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sinusoid increments satisfy w[t] = 2cos(a) w[t-1] - w[t-2] exactly.
    fn sinusoid_increments(n: usize) -> Vec<f64> {
        (0..n).map(|t| 3.0 * (0.5 * t as f64 + 0.3).sin()).collect()
    }

    fn cumulative(start: f64, increments: &[f64]) -> Vec<f64> {
        let mut level = start;
        let mut out = vec![start];
        for w in increments {
            level += w;
            out.push(level);
        }
        out
    }

    fn seasonal_series(n: usize) -> Vec<f64> {
        (0..n)
            .map(|t| {
                let t = t as f64;
                55.0 + 20.0 * (2.0 * std::f64::consts::PI * t / 365.0).sin()
                    + 3.0 * (1.7 * t).sin()
                    + ((t * 17.0 + 7.0) % 13.0)
                    - 6.0
            })
            .collect()
    }

    #[test]
    fn default_order_is_5_1_0() {
        assert_eq!(ArimaOrder::default(), ArimaOrder::new(5, 1, 0));
        assert_eq!(ArimaOrder::DEFAULT.to_string(), "ARIMA(5,1,0)");
        assert_eq!(ArimaOrder::DEFAULT.min_observations(), 11);
    }

    #[test]
    fn min_observations_covers_degenerate_orders() {
        assert_eq!(ArimaOrder::new(0, 1, 0).min_observations(), 2);
        assert_eq!(ArimaOrder::new(1, 0, 0).min_observations(), 2);
        assert_eq!(ArimaOrder::new(2, 2, 0).min_observations(), 6);
    }

    #[test]
    fn recovers_exact_ar2_process() {
        let increments = sinusoid_increments(40);
        let series = cumulative(10.0, &increments);
        let fitted = ArimaModel::new(ArimaOrder::new(2, 1, 0))
            .fit(&series)
            .unwrap();

        let phi = fitted.coefficients();
        assert!((phi[0] - 2.0 * 0.5_f64.cos()).abs() < 1e-6);
        assert!((phi[1] + 1.0).abs() < 1e-6);
        assert!(fitted.sigma2() < 1e-12);

        let forecast = fitted.forecast(3);
        let extended = cumulative(10.0, &sinusoid_increments(43));
        for (step, value) in forecast.iter().enumerate() {
            assert!((value - extended[41 + step]).abs() < 1e-6);
        }
    }

    #[test]
    fn recovers_ar1_without_differencing() {
        let series: Vec<f64> = (0..20).map(|t| 100.0 * 0.8_f64.powi(t)).collect();
        let fitted = ArimaModel::new(ArimaOrder::new(1, 0, 0)).fit(&series).unwrap();

        assert!((fitted.coefficients()[0] - 0.8).abs() < 1e-9);
        let forecast = fitted.forecast(2);
        assert!((forecast[0] - 100.0 * 0.8_f64.powi(20)).abs() < 1e-6);
        assert!((forecast[1] - 100.0 * 0.8_f64.powi(21)).abs() < 1e-6);
    }

    #[test]
    fn random_walk_repeats_last_value() {
        let series = [3.0, 5.0, 4.0, 8.0];
        let fitted = ArimaModel::new(ArimaOrder::new(0, 1, 0)).fit(&series).unwrap();
        assert_eq!(fitted.forecast(3), vec![8.0, 8.0, 8.0]);
    }

    #[test]
    fn default_order_forecast_is_finite_and_deterministic() {
        let series = seasonal_series(400);
        let model = ArimaModel::new(ArimaOrder::DEFAULT);

        let first = model.fit(&series).unwrap().forecast(7);
        let second = model.fit(&series).unwrap().forecast(7);

        assert_eq!(first.len(), 7);
        assert!(first.iter().all(|v| v.is_finite()));
        assert_eq!(first, second);
    }

    #[test]
    fn forecast_of_zero_steps_is_empty() {
        let fitted = ArimaModel::default().fit(&seasonal_series(50)).unwrap();
        assert!(fitted.forecast(0).is_empty());
        assert_eq!(fitted.n_obs(), 50);
        assert_eq!(fitted.order(), ArimaOrder::DEFAULT);
    }

    #[test]
    fn rejects_short_series() {
        let err = ArimaModel::default()
            .fit(&[1.0, 2.0, 4.0, 3.0, 5.0])
            .unwrap_err();
        assert_eq!(
            err,
            ModelFittingError::InsufficientData {
                required: 11,
                actual: 5
            }
        );
    }

    #[test]
    fn rejects_constant_series() {
        let err = ArimaModel::default().fit(&[42.0; 30]).unwrap_err();
        assert!(matches!(err, ModelFittingError::SingularDesign { .. }));
    }

    #[test]
    fn rejects_all_zero_series() {
        let err = ArimaModel::default().fit(&[0.0; 30]).unwrap_err();
        assert!(matches!(err, ModelFittingError::SingularDesign { rank: 0, .. }));
    }

    #[test]
    fn rejects_linear_trend() {
        let series: Vec<f64> = (0..30).map(|t| 2.0 * t as f64 + 1.0).collect();
        let err = ArimaModel::default().fit(&series).unwrap_err();
        assert!(matches!(
            err,
            ModelFittingError::SingularDesign { required: 5, .. }
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        let mut series = seasonal_series(30);
        series[12] = f64::NAN;
        assert_eq!(
            ArimaModel::default().fit(&series).unwrap_err(),
            ModelFittingError::NonFiniteValue { index: 12 }
        );
    }

    #[test]
    fn rejects_moving_average_terms() {
        let err = ArimaModel::new(ArimaOrder::new(1, 1, 1))
            .fit(&seasonal_series(30))
            .unwrap_err();
        assert_eq!(err, ModelFittingError::UnsupportedOrder { q: 1 });
    }
}
