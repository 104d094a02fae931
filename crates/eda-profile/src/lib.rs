//! Exploratory data analysis for eda-stats tables
//!
//! Computes one immutable [`ColumnProfile`] per column: non-missing and
//! missing counts always, min/max/mean/standard deviation for numeric
//! columns, distinct-value frequencies for categorical columns, and
//! true/false tallies for boolean columns. The input table is never
//! mutated and identical inputs produce identical outputs.
//!
//! # Example
//!
//! ```rust
//! use eda_core::{Column, Table};
//! use eda_profile::profile_table;
//!
//! let table = Table::new(vec![
//!     Column::numeric("age", vec![Some(10.0), Some(20.0), None, Some(40.0)]),
//! ]).unwrap();
//!
//! let profiles = profile_table(&table);
//! assert_eq!(profiles["age"].count, 3);
//! assert_eq!(profiles["age"].missing, 1);
//! ```

mod profiler;
mod types;

pub use profiler::{profile_column, profile_table};
pub use types::{
    BooleanSummary, CategoricalSummary, ColumnProfile, ColumnSummary, NumericSummary,
};
