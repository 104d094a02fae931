//! `eda load` - validation pass over a delimited file

use crate::InputArgs;
use anyhow::Result;
use eda_loader::load_csv;

pub fn run(input: &InputArgs) -> Result<()> {
    let options = input.load_options()?;
    let table = load_csv(&input.file, &options)?;

    println!(
        "{}: {} rows x {} columns",
        input.file.display(),
        table.row_count(),
        table.column_count()
    );
    for column in table.columns() {
        println!(
            "  {} ({}, {} missing)",
            column.name(),
            column.dtype(),
            column.missing_count()
        );
    }
    Ok(())
}
