//! Validation orchestration: the step battery and the report it builds.

pub mod linearity;
pub mod steps;

pub use linearity::{AnovaTable, LinearityReport, LinearityValidator, OutlierScan, RegressionSummary};
pub use steps::{StepId, StepResult, StepStatus};
