//! Core tabular data model for eda-stats
//!
//! This crate provides the in-memory [`Table`] representation shared by the
//! loader, profiler, hypothesis tester, and report emitter, along with the
//! unified [`Error`] type used across the workspace.
//!
//! # Example
//!
//! ```rust
//! use eda_core::{Column, Table};
//!
//! let table = Table::new(vec![
//!     Column::numeric("age", vec![Some(10.0), Some(20.0), None, Some(40.0)]),
//! ]).unwrap();
//!
//! assert_eq!(table.row_count(), 4);
//! assert_eq!(table.numeric_values("age").unwrap(), vec![10.0, 20.0, 40.0]);
//! ```

mod error;
mod table;
mod value;

pub use error::{Error, Result};
pub use table::{Column, Table};
pub use value::{ColumnType, Value};
