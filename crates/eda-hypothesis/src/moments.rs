//! Shared sample moments

/// Arithmetic mean; callers guarantee a non-empty sample
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with the n - 1 denominator; callers guarantee n >= 2
pub(crate) fn sample_variance(values: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = values.iter().map(|&x| (x - mean) * (x - mean)).sum();
    sum_sq / (values.len() as f64 - 1.0)
}

/// Two-sided p-value from an absolute statistic and its CDF at that point
pub(crate) fn two_sided(cdf_at_abs: f64) -> f64 {
    (2.0 * (1.0 - cdf_at_abs)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_moments() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let m = mean(&xs);
        assert_relative_eq!(m, 2.5);
        assert_relative_eq!(sample_variance(&xs, m), 5.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_sided_clamps() {
        assert_relative_eq!(two_sided(0.975), 0.05, epsilon = 1e-12);
        assert_relative_eq!(two_sided(1.0), 0.0);
        assert_relative_eq!(two_sided(0.5), 1.0);
        // Numerical noise below 0.5 must not push p above 1
        assert_relative_eq!(two_sided(0.4999999), 1.0);
    }
}
