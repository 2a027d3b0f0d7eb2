//! Residual diagnostics for the fitted calibration model.

pub mod breusch_pagan;
pub mod durbin_watson;
pub mod shapiro;

pub use breusch_pagan::breusch_pagan_pvalue;
pub use durbin_watson::durbin_watson;
pub use shapiro::shapiro_wilk;
