//! Wilcoxon signed-rank test
//!
//! Non-parametric paired comparison. Zero differences are dropped before
//! ranking; the reported statistic is the positive-rank sum W+. Normal
//! approximation with tie correction and no continuity correction, matching
//! the Mann-Whitney variant.

use crate::mann_whitney::average_ranks;
use crate::moments::two_sided;
use eda_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

pub(crate) fn wilcoxon_signed_rank(pairs: &[(f64, f64)]) -> Result<(f64, f64)> {
    let diffs: Vec<f64> = pairs
        .iter()
        .map(|&(a, b)| a - b)
        .filter(|&d| d != 0.0)
        .collect();
    if diffs.is_empty() {
        // Every pair agrees exactly
        return Ok((0.0, 1.0));
    }

    let abs_diffs: Vec<f64> = diffs.iter().map(|d| d.abs()).collect();
    let (ranks, tie_term) = average_ranks(&abs_diffs);
    let w_plus: f64 = diffs
        .iter()
        .zip(&ranks)
        .filter(|(&d, _)| d > 0.0)
        .map(|(_, &rank)| rank)
        .sum();

    let n = diffs.len() as f64;
    let mean_w = n * (n + 1.0) / 4.0;
    let var_w = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0 - tie_term / 48.0;
    if var_w <= 0.0 {
        return Ok((w_plus, 1.0));
    }

    let z = (w_plus - mean_w) / var_w.sqrt();
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("normal distribution: {e}")))?;
    Ok((w_plus, two_sided(normal.cdf(z.abs()))))
}
