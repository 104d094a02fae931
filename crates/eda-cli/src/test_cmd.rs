//! `eda test` - run one hypothesis test

use crate::{InputArgs, OutputArgs};
use anyhow::Result;
use eda_hypothesis::{run_test, TestKind};
use eda_loader::load_csv;

pub fn run(
    input: &InputArgs,
    test: &str,
    columns: &[String],
    alpha: f64,
    output: &OutputArgs,
) -> Result<()> {
    let kind: TestKind = test.parse()?;
    let options = input.load_options()?;
    let table = load_csv(&input.file, &options)?;

    let column_refs: Vec<&str> = columns.iter().map(String::as_str).collect();
    let result = run_test(&table, kind, &column_refs, alpha)?;

    let content = if output.json {
        serde_json::to_string_pretty(&result)? + "\n"
    } else {
        format!("{result}\n")
    };
    output.emit(&content)
}
