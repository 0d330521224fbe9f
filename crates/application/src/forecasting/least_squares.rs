//! Least squares solver for the AR regression.
//!
//! We solve
//!
//! ```text
//! minimize Σ (y_i - x_i^T φ)^2
//! ```
//!
//! through SVD so tall design matrices are handled directly. Unlike a plain
//! tolerance-relaxing solve, rank deficiency is reported as an error: a
//! degenerate series must never yield silent zero coefficients.

use nalgebra::{DMatrix, DVector};

use super::error::ModelFittingError;

/// Singular values below `max_sv * RELATIVE_RANK_TOL * max(rows, cols)` count as zero.
const RELATIVE_RANK_TOL: f64 = 1e-10;

/// Solve a least squares problem, requiring full column rank.
pub(crate) fn solve_least_squares(
    x: &DMatrix<f64>,
    y: &DVector<f64>,
) -> Result<DVector<f64>, ModelFittingError> {
    let required = x.ncols();
    let svd = x.clone().svd(true, true);

    let max_sv = svd.singular_values.max();
    if !max_sv.is_finite() || max_sv <= 0.0 {
        return Err(ModelFittingError::SingularDesign { rank: 0, required });
    }

    let eps = max_sv * RELATIVE_RANK_TOL * x.nrows().max(x.ncols()) as f64;
    let rank = svd.rank(eps);
    if rank < required {
        return Err(ModelFittingError::SingularDesign { rank, required });
    }

    let beta = svd
        .solve(y, eps)
        .map_err(|e| ModelFittingError::Solver(e.to_string()))?;

    if beta.iter().all(|v| v.is_finite()) {
        Ok(beta)
    } else {
        Err(ModelFittingError::Solver(
            "non-finite coefficients".to_string(),
        ))
    }
}
