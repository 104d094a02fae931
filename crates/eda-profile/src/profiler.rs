//! Column and table profiling
//!
//! Statistics use the two-pass formulas over non-missing values. Identical
//! input always yields bit-identical output: there is no randomness and no
//! external state, and map keys are ordered.

use crate::types::{
    BooleanSummary, CategoricalSummary, ColumnProfile, ColumnSummary, NumericSummary,
};
use eda_core::{Column, ColumnType, Table, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Profile every column of a table
///
/// Exactly one profile per column, keyed by column name.
pub fn profile_table(table: &Table) -> BTreeMap<String, ColumnProfile> {
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "profiling table"
    );
    table
        .columns()
        .iter()
        .map(|column| (column.name().to_string(), profile_column(column)))
        .collect()
}

/// Profile a single column
pub fn profile_column(column: &Column) -> ColumnProfile {
    let missing = column.missing_count();
    let count = column.len() - missing;
    let summary = match column.dtype() {
        ColumnType::Numeric => ColumnSummary::Numeric(numeric_summary(&column.numeric_values())),
        ColumnType::Categorical => ColumnSummary::Categorical(categorical_summary(column)),
        ColumnType::Boolean => ColumnSummary::Boolean(boolean_summary(column)),
    };
    ColumnProfile {
        name: column.name().to_string(),
        dtype: column.dtype(),
        count,
        missing,
        summary,
    }
}

/// Two-pass summary of a numeric sample; `None` for an empty sample
fn numeric_summary(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &x in values {
        min = min.min(x);
        max = max.max(x);
        sum += x;
    }
    let mean = sum / n;

    let (variance, std_dev) = if values.len() >= 2 {
        let sum_sq: f64 = values.iter().map(|&x| (x - mean) * (x - mean)).sum();
        let variance = sum_sq / (n - 1.0);
        (Some(variance), Some(variance.sqrt()))
    } else {
        (None, None)
    };

    Some(NumericSummary {
        min,
        max,
        mean,
        variance,
        std_dev,
    })
}

fn categorical_summary(column: &Column) -> CategoricalSummary {
    let mut frequencies: BTreeMap<String, usize> = BTreeMap::new();
    for value in column.values() {
        if let Value::Text(s) = value {
            *frequencies.entry(s.clone()).or_insert(0) += 1;
        }
    }
    // Ties resolve to the lexicographically-first value
    let mode = frequencies
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
        .map(|(value, _)| value.clone());
    CategoricalSummary { frequencies, mode }
}

fn boolean_summary(column: &Column) -> BooleanSummary {
    let mut true_count = 0;
    let mut false_count = 0;
    for value in column.values() {
        match value {
            Value::Bool(true) => true_count += 1,
            Value::Bool(false) => false_count += 1,
            _ => {}
        }
    }
    BooleanSummary {
        true_count,
        false_count,
    }
}
