//! Declarative case suites
//!
//! A case names one reducer invocation and, optionally, the output it must
//! produce. Suites are read from YAML (or JSON, by file extension):
//!
//! ```yaml
//! name: smoke
//! cases:
//!   - name: max-of-threes
//!     extremum: max
//!     k: 3
//!     input: [3, 4, -1, 6, 7, 11]
//!     expected: [4, 11]
//!   - name: zero-k
//!     k: 0
//!     input: [1]
//!     expect_error: true
//! ```
//!
//! `k` falls back to the extremum's default group size when omitted.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::reducer::grouped_extrema;
use crate::types::Extremum;

/// A single reducer invocation with its expectation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Tags for filtering cases
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub extremum: Extremum,

    /// Group size; the extremum's default when absent
    #[serde(default)]
    pub k: Option<i64>,

    #[serde(default)]
    pub input: Vec<f64>,

    /// Output the reducer must produce. Any output passes when absent.
    #[serde(default)]
    pub expected: Option<Vec<f64>>,

    /// The reducer must reject this case
    #[serde(default)]
    pub expect_error: bool,
}

impl Case {
    pub fn new(name: impl Into<String>, extremum: Extremum, k: i64, input: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            extremum,
            k: Some(k),
            input,
            expected: None,
            expect_error: false,
        }
    }

    pub fn expecting(mut self, expected: Vec<f64>) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn group_size(&self) -> i64 {
        self.k.unwrap_or_else(|| self.extremum.default_group_size())
    }
}

/// A named collection of cases
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseSuite {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub cases: Vec<Case>,
}

impl CaseSuite {
    /// Parse a suite from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    /// Parse a suite from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }

    /// Load a suite from disk; `.json` files are JSON, everything else YAML
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let mut suite = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };
        if suite.name.is_empty() {
            suite.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        Ok(suite)
    }

    /// Keep only cases carrying `tag`
    pub fn filter_by_tag(&self, tag: &str) -> Self {
        Self {
            name: self.name.clone(),
            cases: self
                .cases
                .iter()
                .filter(|c| c.tags.iter().any(|t| t == tag))
                .cloned()
                .collect(),
        }
    }
}

/// The example scenarios the reducer has always shipped with
pub fn builtin_suite() -> CaseSuite {
    let cases = vec![
        Case::new("max-mixed-signs", Extremum::Max, 3, vec![3.0, 4.0, -1.0, 6.0, 7.0, 11.0])
            .expecting(vec![4.0, 11.0]),
        Case::new("min-mixed-signs", Extremum::Min, 2, vec![3.0, 4.0, -1.0, 6.0, 7.0, 11.0])
            .expecting(vec![3.0, -1.0, 7.0]),
        Case::new(
            "max-ascending",
            Extremum::Max,
            3,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        )
        .expecting(vec![3.0, 6.0, 9.0]),
        Case::new("max-pairs", Extremum::Max, 2, vec![10.0, 20.0, 30.0, 40.0])
            .expecting(vec![20.0, 40.0]),
        Case::new("max-single", Extremum::Max, 3, vec![5.0]).expecting(vec![5.0]),
        Case::new("max-empty", Extremum::Max, 3, Vec::new()).expecting(Vec::new()),
    ];

    CaseSuite {
        name: "builtin".to_string(),
        cases,
    }
}

/// Outcome of running one case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub name: String,
    pub extremum: Extremum,
    pub k: i64,
    pub input: Vec<f64>,
    pub output: Option<Vec<f64>>,
    pub expected: Option<Vec<f64>>,
    pub passed: bool,
    pub error: Option<String>,
}

/// Outcome of running a whole suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub name: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    /// Turn the first failing case into an error
    pub fn ensure_passed(&self) -> Result<()> {
        match self.outcomes.iter().find(|o| !o.passed) {
            Some(outcome) => Err(Error::CaseFailed {
                name: outcome.name.clone(),
                reason: outcome
                    .error
                    .clone()
                    .unwrap_or_else(|| "unexpected output".to_string()),
            }),
            None => Ok(()),
        }
    }
}

/// Element-wise equality where NaN matches NaN
pub fn values_match(actual: &[f64], expected: &[f64]) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(a, e)| (a.is_nan() && e.is_nan()) || a == e)
}

/// Run one case
pub fn run_case(case: &Case) -> CaseOutcome {
    let k = case.group_size();
    let result = grouped_extrema(&case.input, k, case.extremum);

    let (output, passed, error) = match result {
        Ok(output) if case.expect_error => {
            (Some(output), false, Some("expected the reducer to fail".to_string()))
        }
        Ok(output) => match &case.expected {
            Some(expected) if !values_match(&output, expected) => {
                let reason = format!("expected {:?}, got {:?}", expected, output);
                (Some(output), false, Some(reason))
            }
            _ => (Some(output), true, None),
        },
        Err(e) => (None, case.expect_error, Some(e.to_string())),
    };

    CaseOutcome {
        name: case.name.clone(),
        extremum: case.extremum,
        k,
        input: case.input.clone(),
        output,
        expected: case.expected.clone(),
        passed,
        error,
    }
}

/// Run every case of a suite in order
pub fn run_suite(suite: &CaseSuite) -> SuiteReport {
    let mut outcomes = Vec::with_capacity(suite.cases.len());

    for case in &suite.cases {
        let outcome = run_case(case);
        if outcome.passed {
            debug!(
                case = %outcome.name,
                k = outcome.k,
                extremum = %outcome.extremum,
                "case passed"
            );
        } else {
            warn!(
                case = %outcome.name,
                reason = outcome.error.as_deref().unwrap_or(""),
                "case failed"
            );
        }
        outcomes.push(outcome);
    }

    let passed = outcomes.iter().filter(|o| o.passed).count();
    let report = SuiteReport {
        name: suite.name.clone(),
        total: outcomes.len(),
        passed,
        failed: outcomes.len() - passed,
        outcomes,
    };

    info!(
        suite = %report.name,
        total = report.total,
        passed = report.passed,
        failed = report.failed,
        "suite finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_suite_passes() {
        let report = run_suite(&builtin_suite());
        assert_eq!(report.total, 6);
        assert!(report.success(), "{:?}", report.outcomes);
        assert!(report.ensure_passed().is_ok());
    }

    #[test]
    fn test_parse_suite() {
        let yaml = r#"
name: smoke
cases:
  - name: max-of-threes
    tags: [smoke]
    extremum: max
    k: 3
    input: [3, 4, -1, 6, 7, 11]
    expected: [4, 11]
  - name: default-min
    extremum: min
    input: [5, 1, 4]
  - name: zero-k
    k: 0
    input: [1]
    expect_error: true
"#;
        let suite = CaseSuite::from_yaml(yaml).unwrap();
        assert_eq!(suite.cases.len(), 3);
        assert_eq!(suite.cases[1].group_size(), 2);
        assert_eq!(suite.cases[2].extremum, Extremum::Max);
        assert_eq!(suite.filter_by_tag("smoke").cases.len(), 1);

        let report = run_suite(&suite);
        assert!(report.success(), "{:?}", report.outcomes);
        assert_eq!(report.outcomes[1].output, Some(vec![1.0, 4.0]));
    }

    #[test]
    fn test_mismatch_fails() {
        let case = Case::new("wrong", Extremum::Max, 2, vec![1.0, 2.0]).expecting(vec![1.0]);
        let outcome = run_case(&case);
        assert!(!outcome.passed);
        assert!(outcome.error.unwrap().contains("expected [1.0]"));
    }

    #[test]
    fn test_unexpected_error_fails() {
        let case = Case::new("bad-k", Extremum::Min, -1, vec![1.0]);
        let outcome = run_case(&case);
        assert!(!outcome.passed);
        assert!(outcome.output.is_none());

        let report = run_suite(&CaseSuite {
            name: "one".to_string(),
            cases: vec![case],
        });
        match report.ensure_passed() {
            Err(Error::CaseFailed { name, reason }) => {
                assert_eq!(name, "bad-k");
                assert!(reason.contains("positive"));
            }
            other => panic!("expected CaseFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_expected_error_that_never_comes() {
        let mut case = Case::new("empty-zero-k", Extremum::Max, 0, Vec::new());
        case.expect_error = true;
        let outcome = run_case(&case);
        assert!(!outcome.passed);
        assert_eq!(outcome.output, Some(Vec::new()));
    }

    #[test]
    fn test_values_match_nan() {
        assert!(values_match(&[f64::NAN, 1.0], &[f64::NAN, 1.0]));
        assert!(!values_match(&[f64::NAN], &[1.0]));
        assert!(!values_match(&[1.0], &[1.0, 2.0]));
    }
}
