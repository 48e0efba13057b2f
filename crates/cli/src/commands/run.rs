//! Case Suite Commands
//!
//! `groupwise run` executes suites from disk, `groupwise demo` executes the
//! built-in scenarios.

use anyhow::{Context, Result};
use clap::Args;
use groupwise_common::{builtin_suite, run_suite, CaseOutcome, CaseSuite, SuiteReport};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::output::{
    format_values, print_error, print_list, print_success, OutputFormat, TableDisplay,
};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Suite files (YAML, or JSON by extension)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only run cases carrying this tag
    #[arg(short, long)]
    pub tag: Option<String>,
}

/// Case outcome display wrapper
#[derive(Serialize)]
pub struct CaseDisplay {
    pub suite: String,
    #[serde(flatten)]
    pub outcome: CaseOutcome,
}

impl TableDisplay for CaseDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["Suite", "Case", "Mode", "K", "Input", "Output", "Expected", "Passed"]
    }

    fn row(&self) -> Vec<String> {
        let o = &self.outcome;
        vec![
            self.suite.clone(),
            o.name.clone(),
            o.extremum.to_string(),
            o.k.to_string(),
            format_values(&o.input),
            match (&o.output, &o.error) {
                (Some(output), _) => format_values(output),
                (None, Some(error)) => error.clone(),
                (None, None) => "-".to_string(),
            },
            o.expected
                .as_deref()
                .map(format_values)
                .unwrap_or_else(|| "-".to_string()),
            if o.passed { "✓" } else { "✗" }.to_string(),
        ]
    }
}

/// Print the reports and return whether everything passed
pub fn report(reports: Vec<SuiteReport>, format: OutputFormat) -> bool {
    let total: usize = reports.iter().map(|r| r.total).sum();
    let failed: usize = reports.iter().map(|r| r.failed).sum();
    let failures: Vec<String> = reports
        .iter()
        .filter_map(|r| r.ensure_passed().err())
        .map(|e| e.to_string())
        .collect();

    let displays: Vec<CaseDisplay> = reports
        .into_iter()
        .flat_map(|r| {
            let suite = r.name;
            r.outcomes.into_iter().map(move |outcome| CaseDisplay {
                suite: suite.clone(),
                outcome,
            })
        })
        .collect();
    print_list(&displays, format);

    if matches!(format, OutputFormat::Table | OutputFormat::Plain) {
        if failed == 0 {
            print_success(&format!("{} of {} cases passed", total, total));
        } else {
            for failure in &failures {
                print_error(failure);
            }
            print_error(&format!("{} of {} cases failed", failed, total));
        }
    }

    failed == 0
}

/// Load and run every suite named in `args`
pub fn run(args: &RunArgs) -> Result<Vec<SuiteReport>> {
    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let mut suite = CaseSuite::from_file(path)
            .with_context(|| format!("loading suite {}", path.display()))?;
        if let Some(tag) = &args.tag {
            suite = suite.filter_by_tag(tag);
        }
        info!(suite = %suite.name, cases = suite.cases.len(), "running suite");
        reports.push(run_suite(&suite));
    }
    Ok(reports)
}

pub fn execute(args: RunArgs, format: OutputFormat) -> Result<bool> {
    let reports = run(&args)?;
    Ok(report(reports, format))
}

pub fn execute_demo(format: OutputFormat) -> Result<bool> {
    let reports = vec![run_suite(&builtin_suite())];
    Ok(report(reports, format))
}
