//! Config Commands

use anyhow::{bail, Result};
use clap::Subcommand;
use std::path::Path;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{print_success, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn execute(
    cmd: ConfigCommands,
    config: &CliConfig,
    path: &Path,
    format: OutputFormat,
) -> Result<()> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(config)?),
            OutputFormat::Table | OutputFormat::Plain => {
                println!("# {}", path.display());
                print!("{}", toml::to_string_pretty(config)?);
            }
        },
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            CliConfig::default().save(path)?;
            info!(path = %path.display(), "wrote default config");
            print_success(&format!("Wrote {}", path.display()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = CliConfig::default();

        let init = |force: bool| {
            execute(ConfigCommands::Init { force }, &config, &path, OutputFormat::Plain)
        };

        init(false).unwrap();
        assert!(path.exists());
        assert!(init(false).is_err());

        init(true).unwrap();
        assert_eq!(CliConfig::load(&path).unwrap(), CliConfig::default());
    }
}
