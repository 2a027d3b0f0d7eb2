//! Ordinary least-squares fit of `signal ~ intercept + slope * concentration`.

use serde::{Deserialize, Serialize};

use linearity_core::errors::RegressionError;

use super::tails;

/// An immutable fitted calibration model.
///
/// Created once per validation run; every downstream diagnostic reads from
/// it and nothing mutates it afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedOls {
    pub intercept: f64,
    pub slope: f64,
    pub intercept_pvalue: f64,
    pub slope_pvalue: f64,
    pub standard_error_intercept: f64,
    pub standard_error_slope: f64,
    pub r_squared: f64,
    pub r_squared_adjusted: f64,
    /// One residual per observation, in input order.
    pub residuals: Vec<f64>,
    pub degrees_of_freedom_model: usize,
    pub degrees_of_freedom_residual: usize,
    pub sum_of_squares_model: f64,
    pub sum_of_squares_residual: f64,
    pub mean_squared_error_model: f64,
    pub mean_squared_error_residual: f64,
    pub f_value: f64,
    pub f_pvalue: f64,
}

impl FittedOls {
    /// Fit the model over paired observations.
    ///
    /// Needs at least 3 observations (one residual degree of freedom) and a
    /// non-constant predictor. The slope/intercept null hypotheses are
    /// tested two-sided against Student-t with n-2 degrees of freedom.
    pub fn fit(concentration: &[f64], signal: &[f64]) -> Result<Self, RegressionError> {
        let n = concentration.len();
        debug_assert_eq!(n, signal.len(), "observations must be paired");
        if n < 3 {
            return Err(RegressionError::InsufficientData { needed: 3, got: n });
        }

        let n_f = n as f64;
        let mean_x = concentration.iter().sum::<f64>() / n_f;
        let mean_y = signal.iter().sum::<f64>() / n_f;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        let mut syy = 0.0;
        for (&x, &y) in concentration.iter().zip(signal) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }
        if sxx == 0.0 {
            return Err(RegressionError::ConstantPredictor);
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;

        let residuals: Vec<f64> = concentration
            .iter()
            .zip(signal)
            .map(|(&x, &y)| y - (intercept + slope * x))
            .collect();

        let sum_of_squares_residual: f64 = residuals.iter().map(|r| r * r).sum();
        let sum_of_squares_model = syy - sum_of_squares_residual;

        let degrees_of_freedom_model = 1;
        let degrees_of_freedom_residual = n - 2;
        let df_resid = degrees_of_freedom_residual as f64;

        let mean_squared_error_model = sum_of_squares_model;
        let mean_squared_error_residual = sum_of_squares_residual / df_resid;

        let r_squared = if syy == 0.0 {
            1.0
        } else {
            1.0 - sum_of_squares_residual / syy
        };
        let r_squared_adjusted = 1.0 - (1.0 - r_squared) * (n_f - 1.0) / df_resid;

        let standard_error_slope = (mean_squared_error_residual / sxx).sqrt();
        let standard_error_intercept =
            (mean_squared_error_residual * (1.0 / n_f + mean_x * mean_x / sxx)).sqrt();

        let t_slope = slope / standard_error_slope;
        let t_intercept = intercept / standard_error_intercept;
        let slope_pvalue = tails::student_t_two_sided(t_slope, df_resid);
        let intercept_pvalue = tails::student_t_two_sided(t_intercept, df_resid);

        let f_value = mean_squared_error_model / mean_squared_error_residual;
        let f_pvalue = tails::f_sf(f_value, 1.0, df_resid);

        Ok(Self {
            intercept,
            slope,
            intercept_pvalue,
            slope_pvalue,
            standard_error_intercept,
            standard_error_slope,
            r_squared,
            r_squared_adjusted,
            residuals,
            degrees_of_freedom_model,
            degrees_of_freedom_residual,
            sum_of_squares_model,
            sum_of_squares_residual,
            mean_squared_error_model,
            mean_squared_error_residual,
            f_value,
            f_pvalue,
        })
    }

    /// Total sum of squares: model + residual.
    pub fn sum_of_squares_total(&self) -> f64 {
        self.sum_of_squares_model + self.sum_of_squares_residual
    }

    /// Total degrees of freedom: model + residual.
    pub fn degrees_of_freedom_total(&self) -> usize {
        self.degrees_of_freedom_model + self.degrees_of_freedom_residual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn near_perfect_line_recovers_coefficients() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = [2.11, 4.02, 5.92, 8.05, 9.99, 12.01];
        let model = FittedOls::fit(&x, &y).unwrap();
        assert!(close(model.slope, 2.0, 0.05));
        assert!(close(model.intercept, 0.0, 0.2));
        assert!(model.r_squared > 0.999);
        assert!(model.slope_pvalue < 1e-6);
        assert_eq!(model.degrees_of_freedom_residual, 4);
        assert_eq!(model.residuals.len(), 6);
    }

    #[test]
    fn too_few_observations() {
        let err = FittedOls::fit(&[1.0, 2.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, RegressionError::InsufficientData { needed: 3, got: 2 });
    }

    #[test]
    fn constant_predictor() {
        let err = FittedOls::fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, RegressionError::ConstantPredictor);
    }

    #[test]
    fn anova_identities_hold() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.2, 1.9, 3.2, 3.8, 5.1];
        let model = FittedOls::fit(&x, &y).unwrap();
        assert!(close(
            model.sum_of_squares_total(),
            model.sum_of_squares_model + model.sum_of_squares_residual,
            1e-12
        ));
        assert_eq!(model.degrees_of_freedom_total(), 4);
        // F = t² for the slope in simple regression.
        let t = model.slope / model.standard_error_slope;
        assert!(close(model.f_value, t * t, 1e-9));
    }
}
