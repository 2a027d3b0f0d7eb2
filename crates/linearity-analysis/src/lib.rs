//! Linearity validation engine.
//!
//! Validates the analytical linearity of a laboratory measurement method:
//! paired concentration/signal matrices are sanitized, an ordinary
//! least-squares calibration model is fitted, and a fixed battery of
//! statistical diagnostics (slope/intercept hypothesis tests, Shapiro-Wilk
//! normality, Breusch-Pagan homoscedasticity, Durbin-Watson autocorrelation,
//! Dixon Q outlier detection) decides whether the method's response is
//! acceptably linear over the tested range.
//!
//! Pipeline: [`handler::DataHandler`] → [`validator::LinearityValidator`] →
//! [`validator::LinearityReport`]. Each validation run is a pure function of
//! its inputs; for concurrent serving, give every run its own validator.

pub mod anova;
pub mod handler;
pub mod outliers;
pub mod regression;
pub mod validator;

pub use anova::Anova;
pub use handler::DataHandler;
pub use regression::FittedOls;
pub use validator::{LinearityReport, LinearityValidator};
