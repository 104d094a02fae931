//! Pearson correlation with a t-distributed significance test

use crate::moments::{mean, sample_variance, two_sided};
use eda_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Pearson correlation coefficient of paired samples
///
/// Returns (r, p-value, degrees of freedom). The statistic reported is the
/// correlation coefficient itself. Callers guarantee at least three pairs.
pub(crate) fn pearson_correlation(pairs: &[(f64, f64)]) -> Result<(f64, f64, f64)> {
    let n = pairs.len() as f64;
    let xs: Vec<f64> = pairs.iter().map(|&(a, _)| a).collect();
    let ys: Vec<f64> = pairs.iter().map(|&(_, b)| b).collect();
    let mx = mean(&xs);
    let my = mean(&ys);
    let vx = sample_variance(&xs, mx);
    let vy = sample_variance(&ys, my);
    if vx == 0.0 || vy == 0.0 {
        return Err(Error::degenerate("correlation input"));
    }

    let cov: f64 = pairs
        .iter()
        .map(|&(a, b)| (a - mx) * (b - my))
        .sum::<f64>()
        / (n - 1.0);
    let r = (cov / (vx * vy).sqrt()).clamp(-1.0, 1.0);
    let df = n - 2.0;

    if (1.0 - r * r) == 0.0 {
        // Perfectly collinear
        return Ok((r, 0.0, df));
    }

    let t = r * (df / (1.0 - r * r)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("t distribution: {e}")))?;
    Ok((r, two_sided(dist.cdf(t.abs())), df))
}
