//! Delimited-text ingestion for eda-stats
//!
//! This crate reads delimited files into [`eda_core::Table`] values and
//! writes them back out. Behavior is fully determined by [`LoadOptions`]:
//! delimiter, header convention, and encoding are caller-specified, never
//! auto-detected.
//!
//! # Example
//!
//! ```rust
//! use eda_loader::{parse_str, LoadOptions};
//!
//! let table = parse_str("age,city\n34,paris\nNA,oslo\n", &LoadOptions::default()).unwrap();
//! assert_eq!(table.row_count(), 2);
//! assert_eq!(table.column("age").unwrap().missing_count(), 1);
//! ```

mod error;
mod options;
mod reader;
mod writer;

pub use error::{Error, Result};
pub use options::{Encoding, LoadOptions};
pub use reader::{load_csv, parse_str};
pub use writer::{to_bytes, write_csv};
