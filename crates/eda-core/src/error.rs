//! Error types for tabular statistics
//!
//! Provides a unified error type shared by the eda-stats crates.

use thiserror::Error;

/// Core error type for tabular data operations
#[derive(Error, Debug)]
pub enum Error {
    /// A referenced column does not exist in the table
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} values, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Unrecognized hypothesis test identifier
    #[error("Unsupported test: {0}")]
    UnsupportedTest(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two columns in one table share a name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Column lengths disagree within one table
    #[error("Length mismatch: column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A value does not match the column's declared type
    #[error("Type mismatch in column '{column}': expected {expected}, got {got}")]
    TypeMismatch {
        column: String,
        expected: String,
        got: String,
    },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a missing column
    pub fn column_not_found(name: &str) -> Self {
        Self::ColumnNotFound(name.to_string())
    }

    /// Create an error for a sample smaller than a test's minimum
    pub fn too_few_values(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for a significance level outside (0, 1)
    pub fn invalid_alpha(alpha: f64) -> Self {
        Self::InvalidParameter(format!("Significance level {alpha} must be in (0, 1)"))
    }

    /// Create an error for a degenerate numeric computation
    pub fn degenerate(context: &str) -> Self {
        Self::Computation(format!("{context} is degenerate (zero variance)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ColumnNotFound("age".to_string());
        assert_eq!(err.to_string(), "Column not found: age");

        let err = Error::InsufficientData {
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 values, got 1"
        );

        let err = Error::UnsupportedTest("anova".to_string());
        assert_eq!(err.to_string(), "Unsupported test: anova");

        let err = Error::DuplicateColumn("x".to_string());
        assert_eq!(err.to_string(), "Duplicate column name: x");

        let err = Error::LengthMismatch {
            column: "y".to_string(),
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Length mismatch: column 'y' has 3 rows, expected 4"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::column_not_found("height");
        match err {
            Error::ColumnNotFound(name) => assert_eq!(name, "height"),
            _ => panic!("Wrong error type"),
        }

        let err = Error::invalid_alpha(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Significance level 1.5 must be in (0, 1)"
        );

        let err = Error::too_few_values(3, 0);
        match err {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("file not found")),
            _ => panic!("Wrong error type"),
        }
    }
}
