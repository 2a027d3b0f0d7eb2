//! Validation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ALPHA, VALID_ALPHAS};

/// Whether Durbin-Watson boundary values (exactly 0 or exactly 4) count as
/// passing the autocorrelation criterion. Regulatory sources disagree, so
/// the boundary treatment is a policy, not a hardcoded comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurbinWatsonPolicy {
    /// Pass only when 0 < d < 4.
    #[default]
    Exclusive,
    /// Pass when 0 <= d <= 4.
    Inclusive,
}

impl DurbinWatsonPolicy {
    /// Whether the given statistic passes the autocorrelation criterion.
    pub fn accepts(&self, value: f64) -> bool {
        match self {
            Self::Exclusive => value > 0.0 && value < 4.0,
            Self::Inclusive => (0.0..=4.0).contains(&value),
        }
    }
}

/// Which series the Shapiro-Wilk normality test runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalityInput {
    /// The flattened raw analytical signal, pre-regression.
    #[default]
    RawValues,
    /// The fitted model's residuals.
    Residuals,
}

/// Configuration for a linearity validation run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationConfig {
    /// Significance level for all hypothesis tests. Default: 0.05.
    pub alpha: Option<f64>,
    /// Durbin-Watson boundary treatment. Default: exclusive.
    pub durbin_watson_policy: DurbinWatsonPolicy,
    /// Input series for the normality test. Default: raw analytical values.
    pub normality_input: NormalityInput,
}

impl ValidationConfig {
    /// Returns the effective alpha, defaulting to 0.05.
    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(DEFAULT_ALPHA)
    }

    /// Whether the configured alpha is one of the supported levels.
    pub fn alpha_is_supported(&self) -> bool {
        let alpha = self.effective_alpha();
        VALID_ALPHAS.iter().any(|a| (a - alpha).abs() < f64::EPSILON)
    }

    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.effective_alpha(), 0.05);
        assert_eq!(config.durbin_watson_policy, DurbinWatsonPolicy::Exclusive);
        assert_eq!(config.normality_input, NormalityInput::RawValues);
        assert!(config.alpha_is_supported());
    }

    #[test]
    fn boundary_policy() {
        assert!(!DurbinWatsonPolicy::Exclusive.accepts(0.0));
        assert!(!DurbinWatsonPolicy::Exclusive.accepts(4.0));
        assert!(DurbinWatsonPolicy::Exclusive.accepts(2.0));
        assert!(DurbinWatsonPolicy::Inclusive.accepts(0.0));
        assert!(DurbinWatsonPolicy::Inclusive.accepts(4.0));
        assert!(!DurbinWatsonPolicy::Inclusive.accepts(4.1));
        assert!(!DurbinWatsonPolicy::Inclusive.accepts(-0.1));
    }

    #[test]
    fn parses_toml() {
        let config = ValidationConfig::from_toml_str(
            "alpha = 0.01\ndurbin_watson_policy = \"inclusive\"\nnormality_input = \"residuals\"",
        )
        .unwrap();
        assert_eq!(config.effective_alpha(), 0.01);
        assert_eq!(config.durbin_watson_policy, DurbinWatsonPolicy::Inclusive);
        assert_eq!(config.normality_input, NormalityInput::Residuals);
    }

    #[test]
    fn unsupported_alpha_detected() {
        let config = ValidationConfig {
            alpha: Some(0.20),
            ..Default::default()
        };
        assert!(!config.alpha_is_supported());
    }
}
