//! One-way ANOVA over grouped analytical signal.
//!
//! Decomposes the variability of replicate groups into between-treatments
//! and residual components and tests whether any group mean differs
//! (one-way F-test). Usable standalone; the linearity validator reads the
//! same quantities from its fitted regression model.

use serde::{Deserialize, Serialize};

use linearity_core::errors::AnovaError;

use crate::regression::tails;

/// Degrees of freedom for the decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnovaDegreesOfFreedom {
    pub between_treatments: usize,
    pub residual: usize,
    pub total: usize,
}

/// Sum-of-squares decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnovaSumOfSquares {
    pub between_treatments: f64,
    pub residual: f64,
    pub total: f64,
}

/// Mean squares: sum of squares over degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnovaMeanSquares {
    pub between_treatments: f64,
    pub residual: f64,
}

/// One-way ANOVA over replicate groups and their per-group means.
#[derive(Debug, Clone)]
pub struct Anova {
    grouped_data: Vec<Vec<f64>>,
    group_means: Vec<f64>,
}

impl Anova {
    /// Build a validator over grouped data and per-group means.
    ///
    /// Every value and every mean must be a finite non-negative number;
    /// the mean list must pair 1:1 with the groups.
    pub fn new(grouped_data: Vec<Vec<f64>>, group_means: Vec<f64>) -> Result<Self, AnovaError> {
        if grouped_data.len() != group_means.len() {
            return Err(AnovaError::GroupCountMismatch {
                groups: grouped_data.len(),
                means: group_means.len(),
            });
        }
        let all_values = grouped_data.iter().flatten().chain(&group_means);
        for value in all_values.clone() {
            if !value.is_finite() {
                return Err(AnovaError::ValueNotNumber);
            }
        }
        for value in all_values {
            if *value < 0.0 {
                return Err(AnovaError::NegativeValue);
            }
        }
        Ok(Self {
            grouped_data,
            group_means,
        })
    }

    fn total_observations(&self) -> usize {
        self.grouped_data.iter().map(Vec::len).sum()
    }

    /// Between-treatments, residual, and total degrees of freedom.
    pub fn degrees_of_freedom(&self) -> AnovaDegreesOfFreedom {
        let groups = self.grouped_data.len();
        let observations = self.total_observations();
        AnovaDegreesOfFreedom {
            between_treatments: groups.saturating_sub(1),
            residual: observations.saturating_sub(groups),
            total: observations.saturating_sub(1),
        }
    }

    /// Sum-of-squares decomposition against the supplied group means.
    pub fn sum_of_squares(&self) -> AnovaSumOfSquares {
        let observations = self.total_observations() as f64;
        let overall_mean = self.grouped_data.iter().flatten().sum::<f64>() / observations;

        let residual: f64 = self
            .grouped_data
            .iter()
            .zip(&self.group_means)
            .map(|(group, mean)| group.iter().map(|v| (v - mean).powi(2)).sum::<f64>())
            .sum();

        let between_treatments: f64 = self
            .grouped_data
            .iter()
            .zip(&self.group_means)
            .map(|(group, mean)| group.len() as f64 * (mean - overall_mean).powi(2))
            .sum();

        AnovaSumOfSquares {
            between_treatments,
            residual,
            total: between_treatments + residual,
        }
    }

    /// Mean squares from the decomposition above.
    pub fn mean_squares(&self) -> AnovaMeanSquares {
        let df = self.degrees_of_freedom();
        let ss = self.sum_of_squares();
        AnovaMeanSquares {
            between_treatments: ss.between_treatments / df.between_treatments as f64,
            residual: ss.residual / df.residual as f64,
        }
    }

    /// One-way F-test across the groups: `(f_statistic, p_value)`.
    ///
    /// Computed from the groups' own means (the classic `f_oneway`), so a
    /// caller-supplied biased mean cannot skew the hypothesis test.
    pub fn f_ratio(&self) -> (f64, f64) {
        let df = self.degrees_of_freedom();
        let observations = self.total_observations() as f64;
        let overall_mean = self.grouped_data.iter().flatten().sum::<f64>() / observations;

        let mut between = 0.0;
        let mut within = 0.0;
        for group in &self.grouped_data {
            let group_mean = group.iter().sum::<f64>() / group.len() as f64;
            between += group.len() as f64 * (group_mean - overall_mean).powi(2);
            within += group.iter().map(|v| (v - group_mean).powi(2)).sum::<f64>();
        }

        let f = (between / df.between_treatments as f64) / (within / df.residual as f64);
        let p = tails::f_sf(f, df.between_treatments as f64, df.residual as f64);
        (f, p)
    }
}
