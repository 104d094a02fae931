//! Delimited-text parsing into a [`Table`]
//!
//! Parsing is strictly configuration-driven: the delimiter, header
//! convention, and encoding come from [`LoadOptions`]. Column types are
//! inferred from the non-missing cells of each column after the shape has
//! been validated.

use crate::error::{Error, Result};
use crate::options::{Encoding, LoadOptions};
use eda_core::{Column, ColumnType, Table, Value};
use std::path::Path;
use tracing::debug;

/// Field contents treated as missing, after trimming
///
/// Mirrors the common pandas `read_csv` NA markers.
const MISSING_MARKERS: &[&str] = &["", "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL"];

fn is_missing(field: &str) -> bool {
    MISSING_MARKERS.contains(&field.trim())
}

/// Load a delimited file into a [`Table`]
///
/// Fails with [`Error::NotFound`] when the path does not exist, with
/// [`Error::Encoding`] on bytes undecodable under the declared encoding,
/// and with [`Error::Schema`] when records disagree on field count.
pub fn load_csv(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Table> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    let text = decode(&bytes, options.encoding)?;
    let table = parse_str(&text, options)?;
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        path = %path.display(),
        "loaded table"
    );
    Ok(table)
}

/// Parse already-decoded delimited text into a [`Table`]
pub fn parse_str(text: &str, options: &LoadOptions) -> Result<Table> {
    // Headers are handled manually so that width validation covers every
    // record, the header row included.
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records: Vec<csv::StringRecord> = Vec::new();
    for record in reader.records() {
        records.push(record?);
    }
    if records.is_empty() {
        return Ok(Table::empty());
    }

    let width = records[0].len();
    for (index, record) in records.iter().enumerate() {
        if record.len() != width {
            return Err(Error::Schema {
                record: index,
                expected: width,
                actual: record.len(),
            });
        }
    }

    let (names, data) = if options.has_header {
        let names: Vec<String> = records[0].iter().map(str::to_string).collect();
        (names, &records[1..])
    } else {
        let names = (0..width).map(|i| format!("column_{i}")).collect();
        (names, &records[..])
    };

    let mut columns = Vec::with_capacity(width);
    for (index, name) in names.into_iter().enumerate() {
        let cells: Vec<&str> = data.iter().map(|record| &record[index]).collect();
        columns.push(build_column(name, &cells)?);
    }
    Ok(Table::new(columns)?)
}

/// Infer a column's type from its non-missing cells and materialize it
fn build_column(name: String, cells: &[&str]) -> Result<Column> {
    let dtype = infer_type(cells);
    let values = cells
        .iter()
        .map(|cell| {
            if is_missing(cell) {
                Value::Missing
            } else {
                match dtype {
                    ColumnType::Numeric => Value::Number(cell.trim().parse().unwrap_or(f64::NAN)),
                    ColumnType::Boolean => Value::Bool(cell.trim().eq_ignore_ascii_case("true")),
                    ColumnType::Categorical => Value::Text((*cell).to_string()),
                }
            }
        })
        .collect();
    Ok(Column::new(name, dtype, values)?)
}

fn infer_type(cells: &[&str]) -> ColumnType {
    let present: Vec<&str> = cells
        .iter()
        .filter(|cell| !is_missing(cell))
        .map(|cell| cell.trim())
        .collect();
    if present.is_empty() {
        // A fully-missing column carries no type evidence
        return ColumnType::Categorical;
    }
    if present
        .iter()
        .all(|cell| cell.eq_ignore_ascii_case("true") || cell.eq_ignore_ascii_case("false"))
    {
        return ColumnType::Boolean;
    }
    if present.iter().all(|cell| cell.parse::<f64>().is_ok()) {
        return ColumnType::Numeric;
    }
    ColumnType::Categorical
}

fn decode(bytes: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| {
            Error::Encoding(format!(
                "invalid UTF-8 at byte {}",
                e.utf8_error().valid_up_to()
            ))
        }),
        // Every byte is a valid Latin-1 code point
        Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}
