//! Test dispatch over table columns
//!
//! [`run_test`] validates the significance level and column selection,
//! extracts the samples (dropping missing values per column, or per row
//! for the paired and categorical variants), enforces the variant's
//! minimum-sample rule, and delegates to the statistic computation.

use crate::chi_squared::chi_square_independence;
use crate::mann_whitney::mann_whitney_u;
use crate::pearson::pearson_correlation;
use crate::signed_rank::wilcoxon_signed_rank;
use crate::spearman::spearman_correlation;
use crate::student_t::{paired, welch_two_sample};
use crate::types::{TestKind, TestResult};
use eda_core::{ColumnType, Error, Result, Table};
use tracing::debug;

/// Run one hypothesis test against the named columns at level `alpha`
pub fn run_test(table: &Table, kind: TestKind, columns: &[&str], alpha: f64) -> Result<TestResult> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(Error::invalid_alpha(alpha));
    }
    if columns.len() != 2 {
        return Err(Error::InvalidParameter(format!(
            "test '{kind}' requires exactly 2 columns, got {}",
            columns.len()
        )));
    }
    debug!(test = %kind, columns = ?columns, alpha, "running hypothesis test");

    let min = kind.min_samples_per_group();
    let (statistic, p_value, df) = match kind {
        TestKind::TwoSampleMean | TestKind::MannWhitney => {
            let x = table.numeric_values(columns[0])?;
            let y = table.numeric_values(columns[1])?;
            for group in [&x, &y] {
                if group.len() < min {
                    return Err(Error::too_few_values(min, group.len()));
                }
            }
            match kind {
                TestKind::TwoSampleMean => {
                    let (t, p, df) = welch_two_sample(&x, &y)?;
                    (t, p, Some(df))
                }
                _ => {
                    let (u, p) = mann_whitney_u(&x, &y)?;
                    (u, p, None)
                }
            }
        }
        TestKind::PairedMean
        | TestKind::WilcoxonSignedRank
        | TestKind::PearsonCorrelation
        | TestKind::SpearmanCorrelation => {
            let pairs = numeric_pairs(table, columns[0], columns[1])?;
            if pairs.len() < min {
                return Err(Error::too_few_values(min, pairs.len()));
            }
            match kind {
                TestKind::PairedMean => {
                    let (t, p, df) = paired(&pairs)?;
                    (t, p, Some(df))
                }
                TestKind::WilcoxonSignedRank => {
                    let (w, p) = wilcoxon_signed_rank(&pairs)?;
                    (w, p, None)
                }
                TestKind::PearsonCorrelation => {
                    let (r, p, df) = pearson_correlation(&pairs)?;
                    (r, p, Some(df))
                }
                _ => {
                    let (rho, p, df) = spearman_correlation(&pairs)?;
                    (rho, p, Some(df))
                }
            }
        }
        TestKind::ChiSquareIndependence => {
            let pairs = categorical_pairs(table, columns[0], columns[1])?;
            if pairs.len() < min {
                return Err(Error::too_few_values(min, pairs.len()));
            }
            let (statistic, p, df) = chi_square_independence(&pairs)?;
            (statistic, p, Some(df))
        }
    };

    Ok(TestResult::new(
        kind,
        columns.iter().map(|c| (*c).to_string()).collect(),
        statistic,
        p_value,
        df,
        alpha,
    ))
}

/// Rows where both numeric columns are present
fn numeric_pairs(table: &Table, a: &str, b: &str) -> Result<Vec<(f64, f64)>> {
    let left = require_typed(table, a, ColumnType::Numeric)?;
    let right = require_typed(table, b, ColumnType::Numeric)?;
    Ok(left
        .values()
        .iter()
        .zip(right.values())
        .filter_map(|(x, y)| Some((x.as_number()?, y.as_number()?)))
        .collect())
}

/// Rows where both categorical columns are present
fn categorical_pairs<'t>(table: &'t Table, a: &str, b: &str) -> Result<Vec<(&'t str, &'t str)>> {
    let left = require_typed(table, a, ColumnType::Categorical)?;
    let right = require_typed(table, b, ColumnType::Categorical)?;
    Ok(left
        .values()
        .iter()
        .zip(right.values())
        .filter_map(|(x, y)| Some((x.as_text()?, y.as_text()?)))
        .collect())
}

fn require_typed<'t>(
    table: &'t Table,
    name: &str,
    dtype: ColumnType,
) -> Result<&'t eda_core::Column> {
    let column = table.require_column(name)?;
    if column.dtype() != dtype {
        return Err(Error::TypeMismatch {
            column: name.to_string(),
            expected: dtype.name().to_string(),
            got: column.dtype().name().to_string(),
        });
    }
    Ok(column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use eda_core::Column;

    fn numeric_table() -> Table {
        Table::new(vec![
            Column::numeric("a", vec![Some(1.0), Some(2.0), Some(3.0), None]),
            Column::numeric("b", vec![Some(1.0), Some(2.0), Some(3.0), Some(9.0)]),
            Column::numeric("tiny", vec![Some(1.0), None, None, None]),
        ])
        .unwrap()
    }

    #[test]
    fn test_identical_groups_do_not_reject() {
        let table = Table::new(vec![
            Column::numeric("x", vec![Some(1.0), Some(2.0), Some(3.0)]),
            Column::numeric("y", vec![Some(1.0), Some(2.0), Some(3.0)]),
        ])
        .unwrap();
        let result = run_test(&table, TestKind::TwoSampleMean, &["x", "y"], 0.05).unwrap();
        assert_relative_eq!(result.statistic, 0.0);
        assert_relative_eq!(result.p_value, 1.0);
        assert!(!result.reject);
    }

    #[test]
    fn test_missing_values_dropped_per_column() {
        let table = numeric_table();
        // "a" contributes 3 values, "b" all 4
        let result = run_test(&table, TestKind::TwoSampleMean, &["a", "b"], 0.05).unwrap();
        assert!(result.p_value > 0.0 && result.p_value <= 1.0);
    }

    #[test]
    fn test_insufficient_data() {
        let table = numeric_table();
        let err = run_test(&table, TestKind::TwoSampleMean, &["tiny", "b"], 0.05).unwrap_err();
        match err {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected insufficient data, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_column() {
        let table = numeric_table();
        let err = run_test(&table, TestKind::TwoSampleMean, &["a", "nope"], 0.05).unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound(_)));
    }

    #[test]
    fn test_invalid_alpha() {
        let table = numeric_table();
        for alpha in [0.0, 1.0, -0.5, 2.0] {
            let err = run_test(&table, TestKind::TwoSampleMean, &["a", "b"], alpha).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter(_)));
        }
    }

    #[test]
    fn test_wrong_column_count() {
        let table = numeric_table();
        let err = run_test(&table, TestKind::TwoSampleMean, &["a"], 0.05).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_paired_drops_incomplete_rows() {
        let table = Table::new(vec![
            Column::numeric("before", vec![Some(1.0), Some(2.0), None, Some(4.0)]),
            Column::numeric("after", vec![Some(1.5), None, Some(3.0), Some(4.5)]),
        ])
        .unwrap();
        // Only rows 0 and 3 are complete pairs
        let result = run_test(&table, TestKind::PairedMean, &["before", "after"], 0.05).unwrap();
        assert_relative_eq!(result.df.unwrap(), 1.0);
    }

    #[test]
    fn test_chi_square_on_categorical_columns() {
        let table = Table::new(vec![
            Column::categorical(
                "treatment",
                ["x", "x", "x", "y", "y", "y"]
                    .iter()
                    .map(|s| Some((*s).to_string()))
                    .collect(),
            ),
            Column::categorical(
                "outcome",
                ["u", "u", "u", "v", "v", "v"]
                    .iter()
                    .map(|s| Some((*s).to_string()))
                    .collect(),
            ),
        ])
        .unwrap();
        let result = run_test(
            &table,
            TestKind::ChiSquareIndependence,
            &["treatment", "outcome"],
            0.05,
        )
        .unwrap();
        assert_relative_eq!(result.statistic, 6.0, epsilon = 1e-9);
        assert!(result.reject);
    }

    #[test]
    fn test_chi_square_requires_categorical() {
        let table = numeric_table();
        let err = run_test(&table, TestKind::ChiSquareIndependence, &["a", "b"], 0.05).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_pearson_end_to_end() {
        let table = Table::new(vec![
            Column::numeric("x", vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]),
            Column::numeric("y", vec![Some(2.0), Some(4.0), Some(6.0), Some(8.0)]),
        ])
        .unwrap();
        let result = run_test(&table, TestKind::PearsonCorrelation, &["x", "y"], 0.05).unwrap();
        assert_relative_eq!(result.statistic, 1.0);
        assert_relative_eq!(result.p_value, 0.0);
        assert!(result.reject);
    }

    #[test]
    fn test_spearman_end_to_end() {
        // Monotone but nonlinear: Spearman saturates where Pearson would not
        let table = Table::new(vec![
            Column::numeric("x", vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]),
            Column::numeric("y", vec![Some(1.0), Some(10.0), Some(100.0), Some(1000.0)]),
        ])
        .unwrap();
        let result = run_test(&table, TestKind::SpearmanCorrelation, &["x", "y"], 0.05).unwrap();
        assert_relative_eq!(result.statistic, 1.0);
        assert_relative_eq!(result.p_value, 0.0);
        assert_eq!(result.df, Some(2.0));
    }

    #[test]
    fn test_spearman_min_samples() {
        let table = Table::new(vec![
            Column::numeric("x", vec![Some(1.0), Some(2.0)]),
            Column::numeric("y", vec![Some(3.0), Some(4.0)]),
        ])
        .unwrap();
        let err = run_test(&table, TestKind::SpearmanCorrelation, &["x", "y"], 0.05).unwrap_err();
        match err {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected insufficient data, got {other:?}"),
        }
    }

    #[test]
    fn test_wilcoxon_end_to_end() {
        let table = Table::new(vec![
            Column::numeric("before", vec![Some(1.0), Some(2.0), Some(3.0)]),
            Column::numeric("after", vec![Some(1.0), Some(2.0), Some(3.0)]),
        ])
        .unwrap();
        let result =
            run_test(&table, TestKind::WilcoxonSignedRank, &["before", "after"], 0.05).unwrap();
        assert_relative_eq!(result.statistic, 0.0);
        assert_relative_eq!(result.p_value, 1.0);
        assert_eq!(result.df, None);
        assert!(!result.reject);
    }

    #[test]
    fn test_determinism() {
        let table = numeric_table();
        let first = run_test(&table, TestKind::MannWhitney, &["a", "b"], 0.05).unwrap();
        let second = run_test(&table, TestKind::MannWhitney, &["a", "b"], 0.05).unwrap();
        assert_eq!(first, second);
    }
}
