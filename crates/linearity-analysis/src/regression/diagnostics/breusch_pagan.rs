//! Breusch-Pagan test for heteroscedastic residuals.

use linearity_core::errors::RegressionError;

use crate::regression::tails;

/// Breusch-Pagan Lagrange-multiplier p-value.
///
/// Regresses the squared residuals on the concentration design matrix
/// (intercept + concentration) and tests LM = n·R²_aux against chi-squared
/// with 1 degree of freedom. A p-value above alpha means the residual
/// variance is constant across the range (homoscedastic).
pub fn breusch_pagan_pvalue(residuals: &[f64], exog: &[f64]) -> Result<f64, RegressionError> {
    let n = residuals.len();
    debug_assert_eq!(n, exog.len(), "residuals must pair with the design");
    if n < 3 {
        return Err(RegressionError::InsufficientData { needed: 3, got: n });
    }

    let n_f = n as f64;
    let squared: Vec<f64> = residuals.iter().map(|e| e * e).collect();

    let mean_x = exog.iter().sum::<f64>() / n_f;
    let mean_y = squared.iter().sum::<f64>() / n_f;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (&x, &y) in exog.iter().zip(&squared) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }
    if sxx == 0.0 {
        return Err(RegressionError::ConstantPredictor);
    }
    if syy == 0.0 {
        // Squared residuals are constant: no variance trend to find.
        return Ok(1.0);
    }

    let r_squared_aux = (sxy * sxy) / (sxx * syy);
    let lm = n_f * r_squared_aux;
    Ok(tails::chi_squared_sf(lm, 1.0))
}
