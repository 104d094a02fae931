//! eda-stats: tabular dataset ingestion, profiling, and hypothesis testing
//!
//! This crate re-exports the workspace members as one surface. The
//! pipeline is strictly linear and every stage is a pure function of its
//! inputs:
//!
//! loader -> profiler -> hypothesis tester -> report emitter
//!
//! # Example
//!
//! ```rust
//! use eda_stats::{parse_str, profile_table, run_test, LoadOptions, Report, TestKind};
//!
//! let table = parse_str(
//!     "before,after\n10,12\n11,14\n9,11\n12,13\n",
//!     &LoadOptions::default(),
//! ).unwrap();
//!
//! let profiles = profile_table(&table);
//! let result = run_test(&table, TestKind::PairedMean, &["before", "after"], 0.05).unwrap();
//! let tests = [result];
//!
//! let report = Report::new("experiment")
//!     .with_profiles(&profiles)
//!     .with_tests(&tests);
//! println!("{}", report.render_text());
//! ```

pub use eda_core::{Column, ColumnType, Error, Result, Table, Value};
pub use eda_hypothesis::{run_test, TestKind, TestResult};
pub use eda_loader::{load_csv, parse_str, to_bytes, write_csv, Encoding, LoadOptions};
pub use eda_profile::{
    profile_column, profile_table, BooleanSummary, CategoricalSummary, ColumnProfile,
    ColumnSummary, NumericSummary,
};
pub use eda_report::Report;

/// Loader-specific errors (file, schema, and encoding failures)
pub use eda_loader::Error as LoadError;
