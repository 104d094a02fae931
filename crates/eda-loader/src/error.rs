//! Error types for eda-loader

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Schema error: record {record} has {actual} fields, expected {expected}")]
    Schema {
        record: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Core error: {0}")]
    Core(#[from] eda_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
