//! `eda profile` - per-column descriptive statistics

use crate::{InputArgs, OutputArgs};
use anyhow::Result;
use eda_loader::load_csv;
use eda_profile::profile_table;
use eda_report::Report;

pub fn run(input: &InputArgs, output: &OutputArgs) -> Result<()> {
    let options = input.load_options()?;
    let table = load_csv(&input.file, &options)?;
    let profiles = profile_table(&table);

    let report = Report::new(input.file.display().to_string()).with_profiles(&profiles);
    let content = if output.json {
        report.to_json()?
    } else {
        report.render_text()
    };
    output.emit(&content)
}
