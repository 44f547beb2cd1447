//! Command-line interface
//!
//! clap argument parsing, logging setup and the subcommand handlers.

pub mod commands;
pub mod output;

pub use commands::Cli;
pub use output::Output;
