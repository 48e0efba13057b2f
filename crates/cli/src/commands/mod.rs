//! CLI Commands

pub mod config;
pub mod reduce;
pub mod run;
