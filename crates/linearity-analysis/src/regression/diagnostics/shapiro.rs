//! Shapiro-Wilk normality test (Royston's AS R94 approximation).
//!
//! Valid for 3 <= n <= 5000. The W statistic is the squared correlation
//! between the ordered sample and the expected normal order statistics;
//! the p-value comes from Royston's normalizing transformation of W.

use statrs::distribution::{ContinuousCDF, Normal};

use linearity_core::errors::RegressionError;

/// Result of a Shapiro-Wilk test.
#[derive(Debug, Clone, Copy)]
pub struct ShapiroWilk {
    pub statistic: f64,
    pub pvalue: f64,
}

// Royston 1995 polynomial coefficients for the tail weights
// (ascending powers of 1/sqrt(n), constant term omitted).
const C1: [f64; 5] = [0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 5] = [0.042981, -0.293762, -1.752461, 5.682633, -3.582633];

/// Run the Shapiro-Wilk test on a sample.
///
/// The null hypothesis is that the sample is drawn from a normal
/// distribution; a p-value above alpha means normality is not rejected.
pub fn shapiro_wilk(sample: &[f64]) -> Result<ShapiroWilk, RegressionError> {
    let n = sample.len();
    if n < 3 {
        return Err(RegressionError::InsufficientData { needed: 3, got: n });
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mean = sorted.iter().sum::<f64>() / n as f64;
    let denominator: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum();
    if denominator == 0.0 {
        // A constant sample has no distribution to test.
        return Err(RegressionError::ConstantPredictor);
    }

    let normal = Normal::new(0.0, 1.0).map_err(|_| RegressionError::InsufficientData {
        needed: 3,
        got: n,
    })?;

    // Expected normal order statistics via Blom's approximation.
    let m: Vec<f64> = (1..=n)
        .map(|i| normal.inverse_cdf((i as f64 - 0.375) / (n as f64 + 0.25)))
        .collect();
    let ssq_m: f64 = m.iter().map(|v| v * v).sum();

    let weights = royston_weights(&m, ssq_m, n);

    let numerator: f64 = weights
        .iter()
        .zip(&sorted)
        .map(|(a, x)| a * x)
        .sum::<f64>()
        .powi(2);
    let w = (numerator / denominator).min(1.0);

    let pvalue = royston_pvalue(w, n, &normal);
    Ok(ShapiroWilk {
        statistic: w,
        pvalue,
    })
}

/// Royston's corrected weight vector: the normalized order statistics with
/// polynomial-adjusted tail weights (two tails for n > 5, one for n <= 5).
fn royston_weights(m: &[f64], ssq_m: f64, n: usize) -> Vec<f64> {
    let mut weights = vec![0.0; n];
    if n == 3 {
        let root_half = 0.5_f64.sqrt();
        weights[0] = -root_half;
        weights[2] = root_half;
        return weights;
    }

    let u = 1.0 / (n as f64).sqrt();
    let norm = ssq_m.sqrt();
    let last = m[n - 1] / norm + poly(&C1, u);

    if n > 5 {
        let second_last = m[n - 2] / norm + poly(&C2, u);
        let phi = (ssq_m - 2.0 * m[n - 1].powi(2) - 2.0 * m[n - 2].powi(2))
            / (1.0 - 2.0 * last.powi(2) - 2.0 * second_last.powi(2));
        let root_phi = phi.sqrt();
        weights[n - 1] = last;
        weights[n - 2] = second_last;
        weights[0] = -last;
        weights[1] = -second_last;
        for i in 2..n - 2 {
            weights[i] = m[i] / root_phi;
        }
    } else {
        let phi = (ssq_m - 2.0 * m[n - 1].powi(2)) / (1.0 - 2.0 * last.powi(2));
        let root_phi = phi.sqrt();
        weights[n - 1] = last;
        weights[0] = -last;
        for i in 1..n - 1 {
            weights[i] = m[i] / root_phi;
        }
    }
    weights
}

/// Royston's normalizing transformation of W to a standard-normal z.
fn royston_pvalue(w: f64, n: usize, normal: &Normal) -> f64 {
    if w >= 1.0 {
        return 1.0;
    }
    let n_f = n as f64;
    if n == 3 {
        // Exact small-sample form.
        let p = (6.0 / std::f64::consts::PI)
            * ((w.sqrt()).asin() - (0.75_f64.sqrt()).asin());
        return p.clamp(0.0, 1.0);
    }

    let z = if n <= 11 {
        let gamma = -2.273 + 0.459 * n_f;
        let mu = 0.5440 - 0.39978 * n_f + 0.025054 * n_f * n_f - 0.0006714 * n_f.powi(3);
        let sigma = (1.3822 - 0.77857 * n_f + 0.062767 * n_f * n_f - 0.0020322 * n_f.powi(3)).exp();
        (-(gamma - (1.0 - w).ln()).ln() - mu) / sigma
    } else {
        let ln_n = n_f.ln();
        let mu = -1.5861 - 0.31082 * ln_n - 0.083751 * ln_n * ln_n + 0.0038915 * ln_n.powi(3);
        let sigma = (-0.4803 - 0.082676 * ln_n + 0.0030302 * ln_n * ln_n).exp();
        ((1.0 - w).ln() - mu) / sigma
    };
    (1.0 - normal.cdf(z)).clamp(0.0, 1.0)
}

/// Evaluate a polynomial with ascending powers starting at x¹.
fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .map(|(i, c)| c * x.powi(i as i32 + 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_normal_sample_is_not_rejected() {
        // Symmetric, bell-ish replicate spread.
        let sample = [
            9.7, 9.9, 10.0, 10.1, 10.1, 10.2, 10.2, 10.3, 10.4, 10.6, 9.8, 10.0,
        ];
        let result = shapiro_wilk(&sample).unwrap();
        assert!(result.statistic > 0.9);
        assert!(result.pvalue > 0.05, "p = {}", result.pvalue);
    }

    #[test]
    fn extreme_spike_is_rejected() {
        let sample = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 50.0];
        let result = shapiro_wilk(&sample).unwrap();
        assert!(result.pvalue < 1e-4, "p = {}", result.pvalue);
    }

    #[test]
    fn reference_sample_matches_published_pvalue() {
        // HPLC peak areas; SciPy reports W = 0.9269, p = 0.24515.
        let sample = [
            88269.0, 86954.0, 88492.0, 99580.0, 101235.0, 100228.0, 108238.0, 109725.0, 110970.0,
            118102.0, 119044.0, 118292.0, 129714.0, 129481.0, 130213.0,
        ];
        let result = shapiro_wilk(&sample).unwrap();
        assert!((result.statistic - 0.9269).abs() < 1e-3, "W = {}", result.statistic);
        assert!((result.pvalue - 0.24515).abs() < 1e-3, "p = {}", result.pvalue);
    }

    #[test]
    fn tiny_and_constant_samples_error() {
        assert!(matches!(
            shapiro_wilk(&[1.0, 2.0]),
            Err(RegressionError::InsufficientData { .. })
        ));
        assert!(matches!(
            shapiro_wilk(&[3.0, 3.0, 3.0, 3.0]),
            Err(RegressionError::ConstantPredictor)
        ));
    }
}
