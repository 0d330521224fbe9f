//! Model fitting errors

use thiserror::Error;

/// Errors raised while fitting an ARIMA model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelFittingError {
    /// Only pure autoregressive-integrated models are supported
    #[error("moving-average order {q} is not supported (must be 0)")]
    UnsupportedOrder { q: usize },

    /// Series shorter than the order can identify
    #[error("series too short: {actual} observations, at least {required} required")]
    InsufficientData { required: usize, actual: usize },

    /// NaN or infinite input
    #[error("non-finite value at position {index}")]
    NonFiniteValue { index: usize },

    /// Lagged design matrix is rank deficient (constant, zero or trending series)
    #[error("degenerate series: lag matrix has rank {rank}, {required} required")]
    SingularDesign { rank: usize, required: usize },

    /// Least squares solve failed
    #[error("least squares solve failed: {0}")]
    Solver(String),
}
