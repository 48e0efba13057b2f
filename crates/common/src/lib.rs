//! groupwise Common Library
//!
//! Grouped extremum reduction over numeric sequences, plus the parsing and
//! case-suite helpers the `groupwise` CLI builds on.

pub mod cases;
pub mod error;
pub mod input;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use cases::{builtin_suite, run_case, run_suite, Case, CaseOutcome, CaseSuite, SuiteReport};
pub use error::{Error, Result};
pub use reducer::{
    group_bounds, group_report, grouped_extrema, grouped_max, grouped_max_default, grouped_min,
    grouped_min_default,
};
pub use types::*;

/// groupwise version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default directory for user configuration
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".groupwise")
}

/// Default configuration file path
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join("config.toml")
}

/// Home directory helper
mod dirs {
    pub fn home_dir() -> Option<std::path::PathBuf> {
        std::env::var_os("HOME").map(std::path::PathBuf::from)
    }
}
