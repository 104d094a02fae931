//! `eda report` - combined profiles and tests document

use crate::{InputArgs, OutputArgs};
use anyhow::{Context, Result};
use eda_core::Table;
use eda_hypothesis::{run_test, TestKind, TestResult};
use eda_loader::load_csv;
use eda_profile::profile_table;
use eda_report::Report;

pub fn run(input: &InputArgs, tests: &[String], alpha: f64, output: &OutputArgs) -> Result<()> {
    let options = input.load_options()?;
    let table = load_csv(&input.file, &options)?;
    let profiles = profile_table(&table);

    let results: Vec<TestResult> = tests
        .iter()
        .map(|spec| run_spec(&table, spec, alpha))
        .collect::<Result<_>>()?;

    let mut report = Report::new(input.file.display().to_string()).with_profiles(&profiles);
    if !results.is_empty() {
        report = report.with_tests(&results);
    }
    let content = if output.json {
        report.to_json()?
    } else {
        report.render_text()
    };
    output.emit(&content)
}

/// Run one `name:col1,col2` test specification
fn run_spec(table: &Table, spec: &str, alpha: f64) -> Result<TestResult> {
    let (name, columns) = spec
        .split_once(':')
        .with_context(|| format!("test spec '{spec}' is not of the form name:col1,col2"))?;
    let kind: TestKind = name.parse()?;
    let columns: Vec<&str> = columns.split(',').map(str::trim).collect();
    Ok(run_test(table, kind, &columns, alpha)?)
}
