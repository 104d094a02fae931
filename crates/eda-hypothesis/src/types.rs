//! Test identifiers and result types

use eda_core::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The closed set of supported hypothesis tests
///
/// Each variant carries its own minimum-sample rule and statistic/p-value
/// computation; selection is by the caller-supplied identifier, never by
/// inspecting the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestKind {
    /// Welch's t-test for the means of two independent numeric samples
    TwoSampleMean,
    /// One-sample t-test on the pairwise differences of two paired columns
    PairedMean,
    /// Mann-Whitney U test (normal approximation with tie correction)
    MannWhitney,
    /// Wilcoxon signed-rank test on paired columns (normal approximation)
    WilcoxonSignedRank,
    /// Pearson chi-squared test of independence of two categorical columns
    ChiSquareIndependence,
    /// Pearson correlation with a t-distributed significance test
    PearsonCorrelation,
    /// Spearman rank correlation (Pearson on average ranks)
    SpearmanCorrelation,
}

impl TestKind {
    /// The wire/CLI identifier of this test
    pub fn name(&self) -> &'static str {
        match self {
            Self::TwoSampleMean => "two-sample-mean",
            Self::PairedMean => "paired-mean",
            Self::MannWhitney => "mann-whitney",
            Self::WilcoxonSignedRank => "wilcoxon",
            Self::ChiSquareIndependence => "chi-square",
            Self::PearsonCorrelation => "pearson",
            Self::SpearmanCorrelation => "spearman",
        }
    }

    /// Minimum non-missing values required per group (pairs for paired
    /// variants, complete rows for chi-square)
    pub fn min_samples_per_group(&self) -> usize {
        match self {
            Self::TwoSampleMean | Self::MannWhitney => 2,
            Self::PairedMean | Self::WilcoxonSignedRank | Self::ChiSquareIndependence => 2,
            Self::PearsonCorrelation | Self::SpearmanCorrelation => 3,
        }
    }

    /// All supported identifiers, for help text
    pub fn all() -> &'static [TestKind] {
        &[
            Self::TwoSampleMean,
            Self::PairedMean,
            Self::MannWhitney,
            Self::WilcoxonSignedRank,
            Self::ChiSquareIndependence,
            Self::PearsonCorrelation,
            Self::SpearmanCorrelation,
        ]
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TestKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnsupportedTest(s.to_string()))
    }
}

/// The outcome of one hypothesis test, immutable once produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub test: TestKind,
    /// Columns the samples were drawn from, in caller order
    pub columns: Vec<String>,
    pub statistic: f64,
    pub p_value: f64,
    /// Degrees of freedom, where the test has them
    pub df: Option<f64>,
    /// Caller-supplied significance level
    pub alpha: f64,
    /// Whether the null hypothesis is rejected at `alpha`
    pub reject: bool,
}

impl TestResult {
    pub fn new(
        test: TestKind,
        columns: Vec<String>,
        statistic: f64,
        p_value: f64,
        df: Option<f64>,
        alpha: f64,
    ) -> Self {
        Self {
            test,
            columns,
            statistic,
            p_value,
            df,
            alpha,
            reject: p_value < alpha,
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on [{}]: statistic={:.6}, p={:.6}",
            self.test,
            self.columns.join(", "),
            self.statistic,
            self.p_value
        )?;
        if let Some(df) = self.df {
            write!(f, ", df={df:.2}")?;
        }
        write!(
            f,
            " -> {} at alpha={}",
            if self.reject {
                "reject null"
            } else {
                "do not reject null"
            },
            self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_name() {
        for &kind in TestKind::all() {
            assert_eq!(kind.name().parse::<TestKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let err = "anova".parse::<TestKind>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedTest(_)));
        assert_eq!(err.to_string(), "Unsupported test: anova");
    }

    #[test]
    fn test_reject_decision() {
        let result = TestResult::new(
            TestKind::TwoSampleMean,
            vec!["a".to_string(), "b".to_string()],
            2.5,
            0.01,
            Some(10.0),
            0.05,
        );
        assert!(result.reject);

        let result = TestResult::new(
            TestKind::TwoSampleMean,
            vec!["a".to_string(), "b".to_string()],
            0.0,
            1.0,
            Some(10.0),
            0.05,
        );
        assert!(!result.reject);
    }
}
