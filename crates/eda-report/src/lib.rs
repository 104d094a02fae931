//! Report emission for eda-stats
//!
//! Serializes profiler and tester outputs into a human-readable text
//! summary or a JSON document. Pure formatting: the report borrows its
//! inputs and never mutates or recomputes them.
//!
//! # Example
//!
//! ```rust
//! use eda_core::{Column, Table};
//! use eda_profile::profile_table;
//! use eda_report::Report;
//!
//! let table = Table::new(vec![
//!     Column::numeric("age", vec![Some(10.0), Some(20.0), None, Some(40.0)]),
//! ]).unwrap();
//! let profiles = profile_table(&table);
//!
//! let report = Report::new("survey").with_profiles(&profiles);
//! assert!(report.render_text().contains("age"));
//! ```

use eda_hypothesis::TestResult;
use eda_profile::ColumnProfile;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// A structured summary of profiles and test results
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles: Option<&'a BTreeMap<String, ColumnProfile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<&'a [TestResult]>,
}

impl<'a> Report<'a> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            profiles: None,
            tests: None,
        }
    }

    /// Attach column profiles
    pub fn with_profiles(mut self, profiles: &'a BTreeMap<String, ColumnProfile>) -> Self {
        self.profiles = Some(profiles);
        self
    }

    /// Attach test results
    pub fn with_tests(mut self, tests: &'a [TestResult]) -> Self {
        self.tests = Some(tests);
        self
    }

    /// Render a plain-text summary
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}", self.title);

        if let Some(profiles) = self.profiles {
            let _ = writeln!(out);
            let _ = writeln!(out, "## Column profiles ({})", profiles.len());
            for profile in profiles.values() {
                let _ = writeln!(out, "- {profile}");
            }
        }
        if let Some(tests) = self.tests {
            let _ = writeln!(out);
            let _ = writeln!(out, "## Hypothesis tests ({})", tests.len());
            for result in tests {
                let _ = writeln!(out, "- {result}");
            }
        }
        out
    }

    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
