//! Mann-Whitney U test
//!
//! Normal approximation with tie correction and no continuity correction.
//! The reported statistic is U for the first sample.

use crate::moments::two_sided;
use eda_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

pub(crate) fn mann_whitney_u(x: &[f64], y: &[f64]) -> Result<(f64, f64)> {
    let n1 = x.len() as f64;
    let n2 = y.len() as f64;
    let n = n1 + n2;

    let combined: Vec<f64> = x.iter().chain(y.iter()).copied().collect();
    let (ranks, tie_term) = average_ranks(&combined);

    let r1: f64 = ranks[..x.len()].iter().sum();
    let u1 = r1 - n1 * (n1 + 1.0) / 2.0;

    let mean_u = n1 * n2 / 2.0;
    // Tie-corrected variance of U
    let var_u = n1 * n2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
    if var_u <= 0.0 {
        // Every observation is tied with every other
        return Ok((u1, 1.0));
    }

    let z = (u1 - mean_u) / var_u.sqrt();
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("normal distribution: {e}")))?;
    Ok((u1, two_sided(normal.cdf(z.abs()))))
}

/// Ranks (1-based, ties averaged) plus the tie-correction term
/// `sum(t^3 - t)` over tie groups
pub(crate) fn average_ranks(values: &[f64]) -> (Vec<f64>, f64) {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut tie_term = 0.0;
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        let tie_len = (end - start) as f64;
        // Average of positions start+1 ..= end
        let rank = (start + 1 + end) as f64 / 2.0;
        for &index in &order[start..end] {
            ranks[index] = rank;
        }
        tie_term += tie_len * tie_len * tie_len - tie_len;
        start = end;
    }
    (ranks, tie_term)
}
