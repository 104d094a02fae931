//! Profile result types
//!
//! All results are computed once and immutable afterwards. Statistics over
//! a column cover non-missing values only; the bookkeeping invariant is
//! `count + missing == row_count` of the source table.

use eda_core::ColumnType;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Descriptive statistics of a numeric column's non-missing values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample variance (n - 1 denominator); `None` below two values
    pub variance: Option<f64>,
    /// Sample standard deviation; `None` below two values
    pub std_dev: Option<f64>,
}

/// Distinct-value frequencies of a categorical column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalSummary {
    /// Frequency of each distinct value, keyed deterministically
    pub frequencies: BTreeMap<String, usize>,
    /// Most frequent value (ties broken by lexicographic order)
    pub mode: Option<String>,
}

/// True/false tallies of a boolean column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BooleanSummary {
    pub true_count: usize,
    pub false_count: usize,
}

/// Type-specific portion of a column profile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSummary {
    /// `None` when the column has zero non-missing values
    Numeric(Option<NumericSummary>),
    Categorical(CategoricalSummary),
    Boolean(BooleanSummary),
}

/// Complete profile of one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: ColumnType,
    /// Count of non-missing values
    pub count: usize,
    /// Count of missing values
    pub missing: usize,
    pub summary: ColumnSummary,
}

impl fmt::Display for ColumnProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} values, {} missing",
            self.name, self.dtype, self.count, self.missing
        )?;
        match &self.summary {
            ColumnSummary::Numeric(Some(s)) => {
                write!(f, ", min={}, max={}, mean={:.4}", s.min, s.max, s.mean)?;
                if let Some(std_dev) = s.std_dev {
                    write!(f, ", std={std_dev:.4}")?;
                }
                Ok(())
            }
            ColumnSummary::Numeric(None) => write!(f, ", no numeric statistics"),
            ColumnSummary::Categorical(s) => {
                write!(f, ", {} distinct", s.frequencies.len())?;
                if let Some(mode) = &s.mode {
                    write!(f, ", mode={mode}")?;
                }
                Ok(())
            }
            ColumnSummary::Boolean(s) => {
                write!(f, ", true={}, false={}", s.true_count, s.false_count)
            }
        }
    }
}
