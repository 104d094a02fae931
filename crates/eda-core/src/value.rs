//! Cell values and column types

use serde::Serialize;
use std::fmt;

/// Semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Floating-point values
    Numeric,
    /// Free-form string labels
    Categorical,
    /// True/false values
    Boolean,
}

impl ColumnType {
    /// Get the display name of the column type
    pub fn name(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single cell of a table
///
/// `Missing` is a first-class value so that dirty data can be represented
/// without an `Option` wrapper at every call site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    Missing,
}

impl Value {
    /// Whether this cell is the missing marker
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Numeric payload, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(x) => Some(*x),
            _ => None,
        }
    }

    /// Text payload, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The column type this value belongs to, or `None` for `Missing`
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Self::Number(_) => Some(ColumnType::Numeric),
            Self::Text(_) => Some(ColumnType::Categorical),
            Self::Bool(_) => Some(ColumnType::Boolean),
            Self::Missing => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Missing => f.write_str(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Number(1.5).as_number(), Some(1.5));
        assert_eq!(Value::Text("a".to_string()).as_text(), Some("a"));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert!(Value::Missing.is_missing());
        assert_eq!(Value::Missing.as_number(), None);
        assert_eq!(Value::Number(1.0).as_text(), None);
    }

    #[test]
    fn test_value_column_type() {
        assert_eq!(Value::Number(0.0).column_type(), Some(ColumnType::Numeric));
        assert_eq!(
            Value::Text(String::new()).column_type(),
            Some(ColumnType::Categorical)
        );
        assert_eq!(Value::Bool(false).column_type(), Some(ColumnType::Boolean));
        assert_eq!(Value::Missing.column_type(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Text("yes".to_string()).to_string(), "yes");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Missing.to_string(), "");
        assert_eq!(ColumnType::Numeric.to_string(), "numeric");
    }
}
