//! t-tests for mean comparison
//!
//! Welch's test is used for independent samples unconditionally: it does
//! not assume equal variances, reduces to the classic pooled test when the
//! variances agree, and keeps the procedure caller-selected rather than
//! gated on a preliminary variance check.

use crate::moments::{mean, sample_variance, two_sided};
use eda_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Welch's two-sample t-test
///
/// Returns (statistic, p-value, degrees of freedom). Callers guarantee at
/// least two values per sample.
pub(crate) fn welch_two_sample(x: &[f64], y: &[f64]) -> Result<(f64, f64, f64)> {
    let n1 = x.len() as f64;
    let n2 = y.len() as f64;
    let m1 = mean(x);
    let m2 = mean(y);
    let v1 = sample_variance(x, m1);
    let v2 = sample_variance(y, m2);

    let se_sq = v1 / n1 + v2 / n2;
    if se_sq == 0.0 {
        // Both samples are constant
        if m1 == m2 {
            return Ok((0.0, 1.0, n1 + n2 - 2.0));
        }
        return Err(Error::degenerate("two-sample mean comparison"));
    }

    // Welch-Satterthwaite approximation
    let df = se_sq * se_sq
        / ((v1 / n1) * (v1 / n1) / (n1 - 1.0) + (v2 / n2) * (v2 / n2) / (n2 - 1.0));
    let t = (m1 - m2) / se_sq.sqrt();
    Ok((t, student_t_p(t, df)?, df))
}

/// One-sample t-test of the pairwise differences against zero
pub(crate) fn paired(pairs: &[(f64, f64)]) -> Result<(f64, f64, f64)> {
    let diffs: Vec<f64> = pairs.iter().map(|&(a, b)| a - b).collect();
    let n = diffs.len() as f64;
    let m = mean(&diffs);
    let v = sample_variance(&diffs, m);
    let df = n - 1.0;

    if v == 0.0 {
        if m == 0.0 {
            return Ok((0.0, 1.0, df));
        }
        return Err(Error::degenerate("paired mean comparison"));
    }

    let t = m / (v / n).sqrt();
    Ok((t, student_t_p(t, df)?, df))
}

/// Two-sided p-value under a Student's t distribution
fn student_t_p(t: f64, df: f64) -> Result<f64> {
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("t distribution: {e}")))?;
    Ok(two_sided(dist.cdf(t.abs())))
}
