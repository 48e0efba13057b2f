//! Reduce Commands
//!
//! `groupwise max` and `groupwise min`.

use anyhow::{Context, Result};
use clap::Args;
use groupwise_common::{group_report, input, Extremum, GroupExtremum};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

use crate::config::CliConfig;
use crate::output::{format_value, print_list, print_values, OutputFormat, TableDisplay};

#[derive(Args, Debug)]
pub struct ReduceArgs {
    /// Group size (defaults to the configured size for this command)
    #[arg(short, long, allow_negative_numbers = true)]
    pub k: Option<i64>,

    /// Read values from a file instead ('-' for stdin)
    #[arg(long, conflicts_with = "values")]
    pub input: Option<PathBuf>,

    /// Print only the reduced values
    #[arg(long)]
    pub values_only: bool,

    /// Values, separated by spaces or commas; `-k` and other flags go first
    #[arg(allow_hyphen_values = true)]
    pub values: Vec<String>,
}

/// One reduced group for display
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GroupDisplay {
    pub group: usize,
    pub start: usize,
    pub end: usize,
    pub size: usize,
    pub value: f64,
}

impl From<GroupExtremum> for GroupDisplay {
    fn from(g: GroupExtremum) -> Self {
        Self {
            group: g.group,
            start: g.start,
            end: g.end,
            size: g.len(),
            value: g.value,
        }
    }
}

impl TableDisplay for GroupDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["Group", "Range", "Size", "Value"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.group.to_string(),
            format!("{}..{}", self.start, self.end),
            self.size.to_string(),
            format_value(self.value),
        ]
    }
}

/// Collect the input sequence from arguments, a file, or stdin
pub fn read_values(args: &ReduceArgs) -> Result<Vec<f64>> {
    let Some(path) = &args.input else {
        return Ok(input::parse_args(&args.values)?);
    };

    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading values from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading values from {}", path.display()))?
    };

    input::parse_values(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Reduce the sequence described by `args`
pub fn reduce(
    args: &ReduceArgs,
    extremum: Extremum,
    config: &CliConfig,
) -> Result<Vec<GroupDisplay>> {
    let values = read_values(args)?;
    let k = args.k.unwrap_or_else(|| config.group_size(extremum));
    debug!(%extremum, k, len = values.len(), "reducing");

    let report = group_report(&values, k, extremum)?;
    Ok(report.into_iter().map(GroupDisplay::from).collect())
}

/// Bare values to print instead of the group table.
///
/// An empty result always prints as `[]` rather than "No items found.".
pub fn bare_values(values_only: bool, groups: &[GroupDisplay]) -> Option<Vec<f64>> {
    if values_only || groups.is_empty() {
        Some(groups.iter().map(|g| g.value).collect())
    } else {
        None
    }
}

pub fn execute(
    args: ReduceArgs,
    extremum: Extremum,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    let groups = reduce(&args, extremum, config)?;

    match bare_values(args.values_only, &groups) {
        Some(values) => print_values(&values, format),
        None => print_list(&groups, format),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(values: &[&str], k: Option<i64>) -> ReduceArgs {
        ReduceArgs {
            k,
            input: None,
            values_only: false,
            values: values.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_reduce_uses_config_default() {
        let mut config = CliConfig::default();
        config.defaults.min_group_size = 3;

        let groups = reduce(&args(&["3,4,-1,6,7,11"], None), Extremum::Min, &config).unwrap();
        let values: Vec<f64> = groups.iter().map(|g| g.value).collect();
        assert_eq!(values, vec![-1.0, 6.0]);
    }

    #[test]
    fn test_reduce_flag_overrides_config() {
        let groups = reduce(
            &args(&["3", "4", "-1", "6", "7", "11"], Some(2)),
            Extremum::Max,
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[1].row(), vec!["1", "2..4", "2", "6"]);
    }

    #[test]
    fn test_reduce_rejects_zero_k() {
        let err = reduce(&args(&["1"], Some(0)), Extremum::Max, &CliConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("K must be a positive number"));
    }

    #[test]
    fn test_empty_input_prints_bare_values() {
        let groups = reduce(&args(&[], None), Extremum::Max, &CliConfig::default()).unwrap();
        assert!(groups.is_empty());
        assert_eq!(bare_values(false, &groups), Some(Vec::new()));

        let groups = reduce(&args(&["5", "1"], Some(1)), Extremum::Min, &CliConfig::default())
            .unwrap();
        assert_eq!(bare_values(false, &groups), None);
        assert_eq!(bare_values(true, &groups), Some(vec![5.0, 1.0]));
    }

    #[test]
    fn test_reduce_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.json");
        std::fs::write(&path, "[10, 20, 30, 40]").unwrap();

        let mut a = args(&[], Some(2));
        a.input = Some(path);
        let groups = reduce(&a, Extremum::Max, &CliConfig::default()).unwrap();
        let values: Vec<f64> = groups.iter().map(|g| g.value).collect();
        assert_eq!(values, vec![20.0, 40.0]);
    }
}
