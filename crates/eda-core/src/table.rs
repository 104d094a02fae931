//! In-memory tabular dataset
//!
//! A [`Table`] is an ordered sequence of named, equal-length [`Column`]s.
//! Invariants (equal lengths, unique names, values matching the declared
//! column type) are enforced at construction; a valid `Table` can always
//! be profiled or tested without further shape checks.

use crate::error::{Error, Result};
use crate::value::{ColumnType, Value};

/// One named column with a declared semantic type
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    dtype: ColumnType,
    values: Vec<Value>,
}

impl Column {
    /// Create a column, checking every non-missing value against `dtype`
    pub fn new(name: impl Into<String>, dtype: ColumnType, values: Vec<Value>) -> Result<Self> {
        let name = name.into();
        for value in &values {
            if let Some(got) = value.column_type() {
                if got != dtype {
                    return Err(Error::TypeMismatch {
                        column: name,
                        expected: dtype.name().to_string(),
                        got: got.name().to_string(),
                    });
                }
            }
        }
        Ok(Self {
            name,
            dtype,
            values,
        })
    }

    /// Build a numeric column from optional values
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            dtype: ColumnType::Numeric,
            values: values
                .into_iter()
                .map(|v| v.map_or(Value::Missing, Value::Number))
                .collect(),
        }
    }

    /// Build a categorical column from optional values
    pub fn categorical(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            dtype: ColumnType::Categorical,
            values: values
                .into_iter()
                .map(|v| v.map_or(Value::Missing, Value::Text))
                .collect(),
        }
    }

    /// Build a boolean column from optional values
    pub fn boolean(name: impl Into<String>, values: Vec<Option<bool>>) -> Self {
        Self {
            name: name.into(),
            dtype: ColumnType::Boolean,
            values: values
                .into_iter()
                .map(|v| v.map_or(Value::Missing, Value::Bool))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of rows, missing included
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Count of missing cells
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Non-missing numeric payloads, in row order
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(Value::as_number).collect()
    }

    /// Non-missing text payloads, in row order
    pub fn text_values(&self) -> Vec<&str> {
        self.values.iter().filter_map(Value::as_text).collect()
    }
}

/// An ordered collection of named, equal-length columns
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Create a table, validating equal lengths and unique names
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);
        let mut seen = std::collections::HashSet::new();
        for column in &columns {
            if !seen.insert(column.name().to_string()) {
                return Err(Error::DuplicateColumn(column.name().to_string()));
            }
            if column.len() != row_count {
                return Err(Error::LengthMismatch {
                    column: column.name().to_string(),
                    expected: row_count,
                    actual: column.len(),
                });
            }
        }
        Ok(Self { columns, row_count })
    }

    /// An empty table with no columns and no rows
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            row_count: 0,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in table order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Look up a column by name, erroring when absent
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| Error::column_not_found(name))
    }

    /// Non-missing numeric values of a column
    ///
    /// Errors when the column is absent or not numeric.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        let column = self.require_column(name)?;
        if column.dtype() != ColumnType::Numeric {
            return Err(Error::TypeMismatch {
                column: name.to_string(),
                expected: ColumnType::Numeric.name().to_string(),
                got: column.dtype().name().to_string(),
            });
        }
        Ok(column.numeric_values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(vec![
            Column::numeric("age", vec![Some(10.0), Some(20.0), None, Some(40.0)]),
            Column::categorical(
                "group",
                vec![
                    Some("a".to_string()),
                    Some("b".to_string()),
                    Some("a".to_string()),
                    None,
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_table_shape() {
        let table = sample_table();
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_names(), vec!["age", "group"]);
    }

    #[test]
    fn test_column_accessors() {
        let table = sample_table();
        let age = table.column("age").unwrap();
        assert_eq!(age.dtype(), ColumnType::Numeric);
        assert_eq!(age.missing_count(), 1);
        assert_eq!(age.numeric_values(), vec![10.0, 20.0, 40.0]);

        let group = table.column("group").unwrap();
        assert_eq!(group.text_values(), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result = Table::new(vec![
            Column::numeric("x", vec![Some(1.0)]),
            Column::numeric("x", vec![Some(2.0)]),
        ]);
        assert!(matches!(result, Err(Error::DuplicateColumn(_))));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = Table::new(vec![
            Column::numeric("x", vec![Some(1.0), Some(2.0)]),
            Column::numeric("y", vec![Some(2.0)]),
        ]);
        assert!(matches!(result, Err(Error::LengthMismatch { .. })));
    }

    #[test]
    fn test_type_checked_construction() {
        let result = Column::new(
            "x",
            ColumnType::Numeric,
            vec![Value::Number(1.0), Value::Text("oops".to_string())],
        );
        assert!(matches!(result, Err(Error::TypeMismatch { .. })));

        // Missing cells are allowed in any column
        let column = Column::new(
            "x",
            ColumnType::Numeric,
            vec![Value::Number(1.0), Value::Missing],
        )
        .unwrap();
        assert_eq!(column.missing_count(), 1);
    }

    #[test]
    fn test_missing_column_lookup() {
        let table = sample_table();
        assert!(table.column("nope").is_none());
        assert!(matches!(
            table.require_column("nope"),
            Err(Error::ColumnNotFound(_))
        ));
        assert!(matches!(
            table.numeric_values("group"),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::empty();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }
}
