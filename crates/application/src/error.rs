//! Application-level errors

use domain::{DomainError, WeatherVariable};
use thiserror::Error;

use crate::forecasting::ModelFittingError;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A variable's model could not be fitted
    #[error("Model fitting failed for {variable}: {source}")]
    ModelFitting {
        variable: WeatherVariable,
        #[source]
        source: ModelFittingError,
    },

    /// Caller supplied input that cannot be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Historical data could not be loaded
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Wrap a fitting failure with the variable it happened on
    pub const fn model_fitting(variable: WeatherVariable, source: ModelFittingError) -> Self {
        Self::ModelFitting { variable, source }
    }
}
