//! groupwise CLI - Main Entry Point

use clap::{Parser, Subcommand};
use groupwise_common::Extremum;
use std::path::PathBuf;

use groupwise_cli::commands::{config, reduce, run};
use groupwise_cli::config::CliConfig;
use groupwise_cli::output::{self, OutputFormat};

/// groupwise - per-group maxima and minima of number sequences
#[derive(Parser)]
#[command(name = "groupwise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file
    #[arg(long, env = "GROUPWISE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Maximum of each group of K values (K defaults to 3)
    Max(reduce::ReduceArgs),

    /// Minimum of each group of K values (K defaults to 2)
    Min(reduce::ReduceArgs),

    /// Run case suites from files
    Run(run::RunArgs),

    /// Run the built-in example scenarios
    Demo,

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(config::ConfigCommands),

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config_path = cli.config.unwrap_or_else(groupwise_common::default_config_path);
    let settings = CliConfig::load(&config_path)?;
    let format = cli.format.unwrap_or(settings.defaults.format);

    let success = match cli.command {
        Commands::Max(args) => {
            reduce::execute(args, Extremum::Max, &settings, format).map(|_| true)
        }
        Commands::Min(args) => {
            reduce::execute(args, Extremum::Min, &settings, format).map(|_| true)
        }
        Commands::Run(args) => run::execute(args, format),
        Commands::Demo => run::execute_demo(format),
        Commands::Config(cmd) => {
            config::execute(cmd, &settings, &config_path, format).map(|_| true)
        }
        Commands::Version => {
            println!("groupwise v{}", groupwise_common::VERSION);
            Ok(true)
        }
    };

    match success {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}
