//! Statistical hypothesis tests for eda-stats tables
//!
//! A closed, caller-selected set of tests over named table columns. Each
//! [`TestKind`] variant carries its own minimum-sample rule; all tests are
//! two-sided, deterministic, and drop missing values before computing.
//!
//! # Example
//!
//! ```rust
//! use eda_core::{Column, Table};
//! use eda_hypothesis::{run_test, TestKind};
//!
//! let table = Table::new(vec![
//!     Column::numeric("x", vec![Some(1.0), Some(2.0), Some(3.0)]),
//!     Column::numeric("y", vec![Some(1.0), Some(2.0), Some(3.0)]),
//! ]).unwrap();
//!
//! let result = run_test(&table, TestKind::TwoSampleMean, &["x", "y"], 0.05).unwrap();
//! assert!(!result.reject);
//! ```

mod chi_squared;
mod mann_whitney;
mod moments;
mod pearson;
mod runner;
mod signed_rank;
mod spearman;
mod student_t;
mod types;

pub use eda_core::{Error, Result};
pub use runner::run_test;
pub use types::{TestKind, TestResult};
