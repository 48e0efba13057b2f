//! groupwise CLI
//!
//! Command-line interface for per-group maxima and minima over number
//! sequences, and for running case suites against the reducer.

pub mod commands;
pub mod config;
pub mod output;
