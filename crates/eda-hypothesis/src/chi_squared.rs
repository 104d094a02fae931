//! Pearson chi-squared test of independence
//!
//! Builds the contingency table of two categorical columns from rows where
//! both cells are present, then compares observed against expected counts.

use eda_core::{Error, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::collections::BTreeMap;

/// Chi-squared independence test over paired category labels
///
/// Returns (statistic, p-value, degrees of freedom). Callers guarantee at
/// least two complete pairs.
pub(crate) fn chi_square_independence(pairs: &[(&str, &str)]) -> Result<(f64, f64, f64)> {
    let mut row_levels: BTreeMap<&str, usize> = BTreeMap::new();
    let mut col_levels: BTreeMap<&str, usize> = BTreeMap::new();
    for &(a, b) in pairs {
        let next = row_levels.len();
        row_levels.entry(a).or_insert(next);
        let next = col_levels.len();
        col_levels.entry(b).or_insert(next);
    }
    let r = row_levels.len();
    let c = col_levels.len();
    if r < 2 || c < 2 {
        // A one-level factor leaves zero degrees of freedom
        return Err(Error::InsufficientData {
            expected: 2,
            actual: r.min(c),
        });
    }

    let mut observed = vec![vec![0.0f64; c]; r];
    for &(a, b) in pairs {
        observed[row_levels[a]][col_levels[b]] += 1.0;
    }

    let n = pairs.len() as f64;
    let row_totals: Vec<f64> = observed.iter().map(|row| row.iter().sum()).collect();
    let col_totals: Vec<f64> = (0..c)
        .map(|j| observed.iter().map(|row| row[j]).sum())
        .collect();

    let mut statistic = 0.0;
    for i in 0..r {
        for j in 0..c {
            let expected = row_totals[i] * col_totals[j] / n;
            let diff = observed[i][j] - expected;
            statistic += diff * diff / expected;
        }
    }

    let df = ((r - 1) * (c - 1)) as f64;
    let dist = ChiSquared::new(df)
        .map_err(|e| Error::Computation(format!("chi-squared distribution: {e}")))?;
    let p_value = (1.0 - dist.cdf(statistic)).clamp(0.0, 1.0);
    Ok((statistic, p_value, df))
}
