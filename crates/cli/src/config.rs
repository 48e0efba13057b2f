//! CLI configuration

use anyhow::Context;
use groupwise_common::{Extremum, DEFAULT_MAX_GROUP_SIZE, DEFAULT_MIN_GROUP_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::output::OutputFormat;

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Defaults applied when a flag is not given
    pub defaults: DefaultsConfig,
}

/// Per-command defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Group size for `max`
    pub max_group_size: i64,

    /// Group size for `min`
    pub min_group_size: i64,

    /// Output format
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_group_size: DEFAULT_MAX_GROUP_SIZE,
            min_group_size: DEFAULT_MIN_GROUP_SIZE,
            format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config: Self = toml::from_str(&content)
                .with_context(|| format!("parsing config {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }

    /// Group size to use when `-k` is absent
    pub fn group_size(&self, extremum: Extremum) -> i64 {
        match extremum {
            Extremum::Max => self.defaults.max_group_size,
            Extremum::Min => self.defaults.min_group_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.group_size(Extremum::Max), 3);
        assert_eq!(config.group_size(Extremum::Min), 2);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nmin_group_size = 4\nformat = \"json\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.defaults.min_group_size, 4);
        assert_eq!(config.defaults.max_group_size, 3);
        assert_eq!(config.defaults.format, OutputFormat::Json);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = CliConfig::default();
        config.defaults.max_group_size = 5;

        config.save(&path).unwrap();
        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nmax_group_size = \"three\"\n").unwrap();
        assert!(CliConfig::load(&path).is_err());
    }
}
