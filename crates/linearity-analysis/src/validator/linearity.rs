//! The linearity validator: fits the calibration model over grouped data
//! and runs the full diagnostic battery.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use linearity_core::config::{NormalityInput, ValidationConfig};
use linearity_core::constants::R_SQUARED_MIN;
use linearity_core::errors::{OutlierError, RegressionError, ValidationError};

use crate::outliers::{self, DixonConfig};
use crate::regression::diagnostics::shapiro::ShapiroWilk;
use crate::regression::diagnostics::{breusch_pagan_pvalue, durbin_watson, shapiro_wilk};
use crate::regression::FittedOls;

use super::steps::{StepId, StepResult};

/// Calibration model coefficients plus the acceptance criteria derived
/// from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionSummary {
    pub intercept: f64,
    pub slope: f64,
    pub intercept_pvalue: f64,
    pub slope_pvalue: f64,
    pub standard_error_intercept: f64,
    pub standard_error_slope: f64,
    pub r_squared: f64,
    pub r_squared_adjusted: f64,
    /// Slope hypothesis test rejected the zero-slope null.
    pub significant_slope: bool,
    /// Intercept hypothesis test failed to reject the zero-intercept null.
    pub insignificant_intercept: bool,
    /// Coefficient of determination meets the acceptance threshold.
    pub valid_r_squared: bool,
    /// All three regression criteria hold.
    pub valid_regression_model: bool,
}

impl RegressionSummary {
    fn from_model(model: &FittedOls, alpha: f64) -> Self {
        let significant_slope = model.slope_pvalue < alpha;
        let insignificant_intercept = model.intercept_pvalue > alpha;
        let valid_r_squared = model.r_squared >= R_SQUARED_MIN;
        Self {
            intercept: model.intercept,
            slope: model.slope,
            intercept_pvalue: model.intercept_pvalue,
            slope_pvalue: model.slope_pvalue,
            standard_error_intercept: model.standard_error_intercept,
            standard_error_slope: model.standard_error_slope,
            r_squared: model.r_squared,
            r_squared_adjusted: model.r_squared_adjusted,
            significant_slope,
            insignificant_intercept,
            valid_r_squared,
            valid_regression_model: significant_slope && insignificant_intercept && valid_r_squared,
        }
    }
}

/// Regression ANOVA table of the fitted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnovaTable {
    pub degrees_of_freedom_model: usize,
    pub degrees_of_freedom_residual: usize,
    pub degrees_of_freedom_total: usize,
    pub sum_of_squares_model: f64,
    pub sum_of_squares_residual: f64,
    pub sum_of_squares_total: f64,
    pub mean_squared_error_model: f64,
    pub mean_squared_error_residual: f64,
    pub f_value: f64,
    pub f_pvalue: f64,
}

impl AnovaTable {
    fn from_model(model: &FittedOls) -> Self {
        Self {
            degrees_of_freedom_model: model.degrees_of_freedom_model,
            degrees_of_freedom_residual: model.degrees_of_freedom_residual,
            degrees_of_freedom_total: model.degrees_of_freedom_total(),
            sum_of_squares_model: model.sum_of_squares_model,
            sum_of_squares_residual: model.sum_of_squares_residual,
            sum_of_squares_total: model.sum_of_squares_total(),
            mean_squared_error_model: model.mean_squared_error_model,
            mean_squared_error_residual: model.mean_squared_error_residual,
            f_value: model.f_value,
            f_pvalue: model.f_pvalue,
        }
    }
}

/// Per-group Dixon Q-test results, with the concentration matrix kept
/// paired: a removed signal drops its concentration too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierScan {
    /// Values flagged per group, empty where the group is clean.
    pub outliers: Vec<Vec<f64>>,
    pub cleaned_analytical: Vec<Vec<f64>>,
    pub cleaned_concentration: Vec<Vec<f64>>,
}

impl OutlierScan {
    /// Total number of flagged values across groups.
    pub fn outlier_count(&self) -> usize {
        self.outliers.iter().map(Vec::len).sum()
    }
}

/// Everything one validation run produced, serializable as-is for the
/// transport boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearityReport {
    /// The overall verdict: regression criteria, normality,
    /// homoscedasticity and autocorrelation all acceptable.
    pub is_linear: bool,
    pub regression: Option<RegressionSummary>,
    pub anova: Option<AnovaTable>,
    pub shapiro_pvalue: Option<f64>,
    pub breusch_pagan_pvalue: Option<f64>,
    pub durbin_watson_value: Option<f64>,
    pub outlier_scan: Option<OutlierScan>,
    /// One entry per step, in execution order.
    pub steps: Vec<StepResult>,
}

/// Validates the linearity of one grouped calibration data set.
///
/// Built from already-sanitized matrices (see
/// [`DataHandler`](crate::handler::DataHandler)). The fit is lazy and
/// cached; accessors that need the model return
/// [`RegressionError::NotFitted`] until [`fit`](Self::fit) or
/// [`validate`](Self::validate) has run.
#[derive(Debug, Clone)]
pub struct LinearityValidator {
    analytical: Vec<Vec<f64>>,
    concentration: Vec<Vec<f64>>,
    config: ValidationConfig,
    fitted: Option<FittedOls>,
}

impl LinearityValidator {
    /// Build a validator over paired grouped matrices.
    ///
    /// Fails when the configured alpha is not a supported significance
    /// level or when the data holds no values at all.
    pub fn new(
        analytical: Vec<Vec<f64>>,
        concentration: Vec<Vec<f64>>,
        config: ValidationConfig,
    ) -> Result<Self, ValidationError> {
        if !config.alpha_is_supported() {
            return Err(OutlierError::AlphaNotValid(config.effective_alpha()).into());
        }
        if analytical.iter().all(Vec::is_empty) {
            return Err(OutlierError::DataIsEmpty.into());
        }
        Ok(Self {
            analytical,
            concentration,
            config,
            fitted: None,
        })
    }

    pub fn analytical(&self) -> &[Vec<f64>] {
        &self.analytical
    }

    pub fn concentration(&self) -> &[Vec<f64>] {
        &self.concentration
    }

    fn flat_signal(&self) -> Vec<f64> {
        self.analytical.iter().flatten().copied().collect()
    }

    fn flat_concentration(&self) -> Vec<f64> {
        self.concentration.iter().flatten().copied().collect()
    }

    /// Fit the calibration model. Idempotent: repeated calls reuse the
    /// cached fit.
    pub fn fit(&mut self) -> Result<&FittedOls, RegressionError> {
        if self.fitted.is_none() {
            let model = FittedOls::fit(&self.flat_concentration(), &self.flat_signal())?;
            debug!(
                observations = model.residuals.len(),
                r_squared = model.r_squared,
                "calibration model fitted"
            );
            self.fitted = Some(model);
        }
        self.model()
    }

    /// The fitted model, or `NotFitted` before [`fit`](Self::fit).
    pub fn model(&self) -> Result<&FittedOls, RegressionError> {
        self.fitted.as_ref().ok_or(RegressionError::NotFitted)
    }

    /// Whether the slope hypothesis test rejects the zero-slope null.
    pub fn significant_slope(&self) -> Result<bool, RegressionError> {
        Ok(self.model()?.slope_pvalue < self.config.effective_alpha())
    }

    /// Whether the intercept hypothesis test fails to reject the
    /// zero-intercept null.
    pub fn insignificant_intercept(&self) -> Result<bool, RegressionError> {
        Ok(self.model()?.intercept_pvalue > self.config.effective_alpha())
    }

    /// Whether the coefficient of determination meets the acceptance
    /// threshold.
    pub fn valid_r_squared(&self) -> Result<bool, RegressionError> {
        Ok(self.model()?.r_squared >= R_SQUARED_MIN)
    }

    /// Whether all three regression criteria hold.
    pub fn valid_regression_model(&self) -> Result<bool, RegressionError> {
        Ok(self.significant_slope()?
            && self.insignificant_intercept()?
            && self.valid_r_squared()?)
    }

    /// The fitted model's regression ANOVA table.
    pub fn anova_table(&self) -> Result<AnovaTable, RegressionError> {
        Ok(AnovaTable::from_model(self.model()?))
    }

    /// Shapiro-Wilk normality test on the configured input series.
    ///
    /// Raw values work before fitting; residuals need a fitted model.
    pub fn run_normality_test(&self) -> Result<ShapiroWilk, RegressionError> {
        match self.config.normality_input {
            NormalityInput::RawValues => shapiro_wilk(&self.flat_signal()),
            NormalityInput::Residuals => shapiro_wilk(&self.model()?.residuals),
        }
    }

    /// Breusch-Pagan homoscedasticity test p-value over the residuals.
    pub fn run_homoscedasticity_test(&self) -> Result<f64, RegressionError> {
        breusch_pagan_pvalue(&self.model()?.residuals, &self.flat_concentration())
    }

    /// Durbin-Watson statistic of the residual series.
    pub fn check_residual_autocorrelation(&self) -> Result<f64, RegressionError> {
        durbin_watson(&self.model()?.residuals)
    }

    /// Dixon Q-test every group of the analytical matrix, dropping the
    /// paired concentration of every removed signal.
    pub fn check_outliers(&self) -> Result<OutlierScan, OutlierError> {
        let dixon = DixonConfig {
            alpha: self.config.effective_alpha(),
            ..DixonConfig::default()
        };

        let mut flagged = Vec::with_capacity(self.analytical.len());
        let mut cleaned_analytical = Vec::with_capacity(self.analytical.len());
        let mut cleaned_concentration = Vec::with_capacity(self.concentration.len());

        for (signal_group, conc_group) in self.analytical.iter().zip(&self.concentration) {
            let outcome = outliers::detect(signal_group, dixon)?;
            let kept: Vec<f64> = conc_group
                .iter()
                .enumerate()
                .filter(|(i, _)| !outcome.outlier_indices.contains(i))
                .map(|(_, v)| *v)
                .collect();
            flagged.push(outcome.outliers);
            cleaned_analytical.push(outcome.cleaned);
            cleaned_concentration.push(kept);
        }

        Ok(OutlierScan {
            outliers: flagged,
            cleaned_analytical,
            cleaned_concentration,
        })
    }

    /// Run every validation step and assemble the report.
    ///
    /// A step that cannot run is recorded as errored (or skipped when its
    /// prerequisite fit failed) instead of aborting the run; an errored or
    /// skipped verdict-relevant step makes the verdict negative.
    pub fn validate(&mut self) -> LinearityReport {
        let alpha = self.config.effective_alpha();
        let mut steps = Vec::with_capacity(StepId::all().len());

        match self.fit() {
            Ok(_) => {
                let observations = self.flat_signal().len();
                steps.push(StepResult::pass(
                    StepId::ModelFit,
                    format!("model fitted over {observations} observations"),
                ));
            }
            Err(error) => {
                warn!(step = %StepId::ModelFit, %error, "validation step failed");
                steps.push(StepResult::errored(StepId::ModelFit, error.to_string()));
            }
        }

        let regression = self
            .model()
            .ok()
            .map(|model| RegressionSummary::from_model(model, alpha));
        let anova = self.model().ok().map(AnovaTable::from_model);

        match &regression {
            Some(summary) if summary.valid_regression_model => {
                steps.push(StepResult::pass(
                    StepId::RegressionModel,
                    format!("r_squared = {:.6}", summary.r_squared),
                ));
            }
            Some(summary) => {
                steps.push(StepResult::fail(
                    StepId::RegressionModel,
                    format!(
                        "significant_slope = {}, insignificant_intercept = {}, valid_r_squared = {}",
                        summary.significant_slope,
                        summary.insignificant_intercept,
                        summary.valid_r_squared,
                    ),
                ));
            }
            None => {
                steps.push(StepResult::skipped(
                    StepId::RegressionModel,
                    "model not fitted".into(),
                ));
            }
        }

        let shapiro_pvalue = match self.run_normality_test() {
            Ok(result) => {
                let passed = result.pvalue > alpha;
                let summary = format!("shapiro_pvalue = {:.6}", result.pvalue);
                steps.push(if passed {
                    StepResult::pass(StepId::Normality, summary)
                } else {
                    StepResult::fail(StepId::Normality, summary)
                });
                Some(result.pvalue)
            }
            Err(RegressionError::NotFitted) => {
                steps.push(StepResult::skipped(
                    StepId::Normality,
                    "model not fitted".into(),
                ));
                None
            }
            Err(error) => {
                warn!(step = %StepId::Normality, %error, "validation step failed");
                steps.push(StepResult::errored(StepId::Normality, error.to_string()));
                None
            }
        };

        let breusch_pagan = match self.run_homoscedasticity_test() {
            Ok(pvalue) => {
                let passed = pvalue > alpha;
                let summary = format!("breusch_pagan_pvalue = {pvalue:.6}");
                steps.push(if passed {
                    StepResult::pass(StepId::Homoscedasticity, summary)
                } else {
                    StepResult::fail(StepId::Homoscedasticity, summary)
                });
                Some(pvalue)
            }
            Err(RegressionError::NotFitted) => {
                steps.push(StepResult::skipped(
                    StepId::Homoscedasticity,
                    "model not fitted".into(),
                ));
                None
            }
            Err(error) => {
                warn!(step = %StepId::Homoscedasticity, %error, "validation step failed");
                steps.push(StepResult::errored(
                    StepId::Homoscedasticity,
                    error.to_string(),
                ));
                None
            }
        };

        let durbin_watson = match self.check_residual_autocorrelation() {
            Ok(value) => {
                let passed = self.config.durbin_watson_policy.accepts(value);
                let summary = format!("durbin_watson = {value:.6}");
                steps.push(if passed {
                    StepResult::pass(StepId::Autocorrelation, summary)
                } else {
                    StepResult::fail(StepId::Autocorrelation, summary)
                });
                Some(value)
            }
            Err(RegressionError::NotFitted) => {
                steps.push(StepResult::skipped(
                    StepId::Autocorrelation,
                    "model not fitted".into(),
                ));
                None
            }
            Err(error) => {
                warn!(step = %StepId::Autocorrelation, %error, "validation step failed");
                steps.push(StepResult::errored(
                    StepId::Autocorrelation,
                    error.to_string(),
                ));
                None
            }
        };

        // The outlier scan informs the analyst but never gates the verdict.
        let outlier_scan = match self.check_outliers() {
            Ok(scan) => {
                steps.push(StepResult::pass(
                    StepId::Outliers,
                    format!("{} outliers flagged", scan.outlier_count()),
                ));
                Some(scan)
            }
            Err(error) => {
                warn!(step = %StepId::Outliers, %error, "validation step failed");
                steps.push(StepResult::errored(StepId::Outliers, error.to_string()));
                None
            }
        };

        let is_linear = regression
            .as_ref()
            .is_some_and(|summary| summary.valid_regression_model)
            && shapiro_pvalue.is_some_and(|p| p > alpha)
            && breusch_pagan.is_some_and(|p| p > alpha)
            && durbin_watson.is_some_and(|d| self.config.durbin_watson_policy.accepts(d));

        LinearityReport {
            is_linear,
            regression,
            anova,
            shapiro_pvalue,
            breusch_pagan_pvalue: breusch_pagan,
            durbin_watson_value: durbin_watson,
            outlier_scan,
            steps,
        }
    }
}
