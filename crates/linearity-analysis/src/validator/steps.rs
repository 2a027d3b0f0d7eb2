//! Core types for validation steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 6 validation step identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    ModelFit,
    RegressionModel,
    Normality,
    Homoscedasticity,
    Autocorrelation,
    Outliers,
}

impl StepId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModelFit => "model-fit",
            Self::RegressionModel => "regression-model",
            Self::Normality => "normality",
            Self::Homoscedasticity => "homoscedasticity",
            Self::Autocorrelation => "autocorrelation",
            Self::Outliers => "outliers",
        }
    }

    pub fn all() -> &'static [StepId] {
        &[
            Self::ModelFit,
            Self::RegressionModel,
            Self::Normality,
            Self::Homoscedasticity,
            Self::Autocorrelation,
            Self::Outliers,
        ]
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step execution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Passed,
    Failed,
    Skipped,
    Errored,
}

/// Result produced by each validation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub step_id: StepId,
    pub status: StepStatus,
    /// Whether the step counts toward an overall pass. Skipped steps do
    /// not; errored steps never do.
    pub passed: bool,
    pub summary: String,
    pub error: Option<String>,
}

impl StepResult {
    /// Create a passing step result.
    pub fn pass(step_id: StepId, summary: String) -> Self {
        Self {
            step_id,
            status: StepStatus::Passed,
            passed: true,
            summary,
            error: None,
        }
    }

    /// Create a failing step result.
    pub fn fail(step_id: StepId, summary: String) -> Self {
        Self {
            step_id,
            status: StepStatus::Failed,
            passed: false,
            summary,
            error: None,
        }
    }

    /// Create a skipped step result.
    pub fn skipped(step_id: StepId, reason: String) -> Self {
        Self {
            step_id,
            status: StepStatus::Skipped,
            passed: false,
            summary: reason,
            error: None,
        }
    }

    /// Create an errored step result.
    pub fn errored(step_id: StepId, error: String) -> Self {
        Self {
            step_id,
            status: StepStatus::Errored,
            passed: false,
            summary: format!("{step_id} did not complete"),
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_ids_are_kebab_case() {
        for id in StepId::all() {
            let serialized = serde_json::to_string(id).unwrap();
            assert_eq!(serialized, format!("\"{id}\""));
        }
    }

    #[test]
    fn constructors_set_status() {
        let result = StepResult::pass(StepId::ModelFit, "fitted".into());
        assert_eq!(result.status, StepStatus::Passed);
        assert!(result.passed);

        let result = StepResult::errored(StepId::Normality, "boom".into());
        assert_eq!(result.status, StepStatus::Errored);
        assert!(!result.passed);
        assert_eq!(result.error.as_deref(), Some("boom"));
    }
}
