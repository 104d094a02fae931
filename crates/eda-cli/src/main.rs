//! eda - command-line interface for the eda-stats toolkit
//!
//! One subcommand per pipeline stage: `load` validates shape and schema,
//! `profile` computes per-column statistics, `test` runs one hypothesis
//! test, and `report` combines both into a single document.
//!
//! Exit codes are distinct per error kind: 0 success, 2 file not found,
//! 3 schema error, 4 encoding error, 5 column not found, 6 insufficient
//! data, 7 unsupported test, 1 anything else.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use eda_loader::LoadOptions;
use std::path::PathBuf;
use std::process::ExitCode;

mod load;
mod profile;
mod report;
mod test_cmd;

#[derive(Parser)]
#[command(name = "eda")]
#[command(version)]
#[command(about = "Tabular dataset profiling and hypothesis testing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Parsing options shared by every subcommand
#[derive(Args)]
struct InputArgs {
    /// Path to the delimited input file
    file: PathBuf,

    /// Field delimiter (single ASCII character)
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Treat the first record as data instead of a header row
    #[arg(long)]
    no_header: bool,

    /// Text encoding: utf-8 or latin-1
    #[arg(long, default_value = "utf-8")]
    encoding: String,
}

impl InputArgs {
    fn load_options(&self) -> Result<LoadOptions> {
        if !self.delimiter.is_ascii() {
            anyhow::bail!("delimiter '{}' is not ASCII", self.delimiter);
        }
        let delimiter = self.delimiter as u8;
        let encoding = self
            .encoding
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;
        Ok(LoadOptions::new()
            .with_delimiter(delimiter)
            .with_header(!self.no_header)
            .with_encoding(encoding))
    }
}

/// Output destination shared by the printing subcommands
#[derive(Args)]
struct OutputArgs {
    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Write to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl OutputArgs {
    fn emit(&self, content: &str) -> Result<()> {
        match &self.output {
            Some(path) => std::fs::write(path, content)?,
            None => print!("{content}"),
        }
        Ok(())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Load a delimited file and print its shape and schema
    Load {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Profile every column of a dataset
    Profile {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run one hypothesis test against two columns
    Test {
        #[command(flatten)]
        input: InputArgs,

        /// Test identifier (e.g. two-sample-mean, chi-square)
        #[arg(long)]
        test: String,

        /// The two columns to test, comma-separated
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        columns: Vec<String>,

        /// Significance level
        #[arg(long, default_value_t = 0.05)]
        alpha: f64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Emit a combined report of profiles and optional tests
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Tests to include, each as name:col1,col2 (repeatable)
        #[arg(long = "test")]
        tests: Vec<String>,

        /// Significance level for the included tests
        #[arg(long, default_value_t = 0.05)]
        alpha: f64,

        #[command(flatten)]
        output: OutputArgs,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Load { input } => load::run(&input),
        Commands::Profile { input, output } => profile::run(&input, &output),
        Commands::Test {
            input,
            test,
            columns,
            alpha,
            output,
        } => test_cmd::run(&input, &test, &columns, alpha, &output),
        Commands::Report {
            input,
            tests,
            alpha,
            output,
        } => report::run(&input, &tests, alpha, &output),
    }
}

/// Map error kinds to the documented process exit codes
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(e) = err.downcast_ref::<eda_loader::Error>() {
        return match e {
            eda_loader::Error::NotFound { .. } => 2,
            eda_loader::Error::Schema { .. } => 3,
            eda_loader::Error::Encoding(_) => 4,
            eda_loader::Error::Core(core) => core_exit_code(core),
            _ => 1,
        };
    }
    if let Some(e) = err.downcast_ref::<eda_core::Error>() {
        return core_exit_code(e);
    }
    1
}

fn core_exit_code(err: &eda_core::Error) -> u8 {
    match err {
        eda_core::Error::ColumnNotFound(_) => 5,
        eda_core::Error::InsufficientData { .. } => 6,
        eda_core::Error::UnsupportedTest(_) => 7,
        _ => 1,
    }
}
