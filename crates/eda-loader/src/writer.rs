//! Writing a [`Table`] back to delimited text
//!
//! The writer exists for the loader's round-trip contract: a table written
//! with a given configuration and loaded back with the same configuration
//! compares equal, provided no categorical value collides with a missing
//! marker or looks like a number.

use crate::error::{Error, Result};
use crate::options::{Encoding, LoadOptions};
use eda_core::{Table, Value};
use std::path::Path;

/// Write a table to a delimited file using the given configuration
pub fn write_csv(table: &Table, path: impl AsRef<Path>, options: &LoadOptions) -> Result<()> {
    let bytes = to_bytes(table, options)?;
    std::fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Render a table to delimited bytes in the requested encoding
pub fn to_bytes(table: &Table, options: &LoadOptions) -> Result<Vec<u8>> {
    let mut utf8 = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .from_writer(&mut utf8);

        if options.has_header {
            writer.write_record(table.column_names())?;
        }
        for row in 0..table.row_count() {
            let record: Vec<String> = table
                .columns()
                .iter()
                .map(|column| format_value(&column.values()[row]))
                .collect();
            writer.write_record(&record)?;
        }
        writer.flush()?;
    }

    match options.encoding {
        Encoding::Utf8 => Ok(utf8),
        Encoding::Latin1 => encode_latin1(&utf8),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Number(x) => x.to_string(),
        Value::Text(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Missing => String::new(),
    }
}

fn encode_latin1(utf8: &[u8]) -> Result<Vec<u8>> {
    // Quoting and delimiters are ASCII, so transcoding after the CSV
    // writer is safe.
    let text = std::str::from_utf8(utf8)
        .map_err(|e| Error::Encoding(format!("internal UTF-8 error: {e}")))?;
    text.chars()
        .map(|c| {
            u8::try_from(u32::from(c))
                .map_err(|_| Error::Encoding(format!("'{c}' is not representable in Latin-1")))
        })
        .collect()
}
