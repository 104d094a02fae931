//! Spearman rank correlation
//!
//! Pearson's coefficient computed on the average ranks of each sample,
//! which makes the measure monotone-invariant and robust to outliers.

use crate::mann_whitney::average_ranks;
use crate::pearson::pearson_correlation;
use eda_core::Result;

/// Spearman correlation coefficient of paired samples
///
/// Returns (rho, p-value, degrees of freedom). Callers guarantee at least
/// three pairs.
pub(crate) fn spearman_correlation(pairs: &[(f64, f64)]) -> Result<(f64, f64, f64)> {
    let xs: Vec<f64> = pairs.iter().map(|&(a, _)| a).collect();
    let ys: Vec<f64> = pairs.iter().map(|&(_, b)| b).collect();
    let (x_ranks, _) = average_ranks(&xs);
    let (y_ranks, _) = average_ranks(&ys);

    let rank_pairs: Vec<(f64, f64)> = x_ranks.into_iter().zip(y_ranks).collect();
    pearson_correlation(&rank_pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use eda_core::Error;

    #[test]
    fn test_perfect_monotone_relation() {
        // Nonlinear but strictly increasing
        let pairs = vec![(1.0, 1.0), (2.0, 10.0), (3.0, 100.0)];
        let (rho, p, df) = spearman_correlation(&pairs).unwrap();
        assert_relative_eq!(rho, 1.0);
        assert_relative_eq!(p, 0.0);
        assert_relative_eq!(df, 1.0);
    }

    #[test]
    fn test_known_value_with_ties() {
        // scipy.stats.spearmanr([1,2,3,4,5], [5,6,7,8,7]): rho=0.8208, p=0.0886
        let pairs = vec![(1.0, 5.0), (2.0, 6.0), (3.0, 7.0), (4.0, 8.0), (5.0, 7.0)];
        let (rho, p, df) = spearman_correlation(&pairs).unwrap();
        assert_relative_eq!(rho, 0.8207827, epsilon = 1e-4);
        assert_relative_eq!(df, 3.0);
        assert_relative_eq!(p, 0.0885870, epsilon = 1e-3);
    }

    #[test]
    fn test_constant_sample_degenerate() {
        // All ranks tied on one side leaves zero rank variance
        let pairs = vec![(1.0, 2.0), (1.0, 4.0), (1.0, 6.0)];
        assert!(matches!(
            spearman_correlation(&pairs),
            Err(Error::Computation(_))
        ));
    }
}
