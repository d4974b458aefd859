//! # randorg-cli
//!
//! Command-line front end for random-org-client: argument parsing, config loading, and the
//! value/statistics report printed after each query.

pub mod cli;
pub mod commands;
pub mod report;

pub use cli::{load_config, Charset, Cli, Commands};
pub use commands::execute;
pub use report::{format_statistics, format_values, Reporter};
