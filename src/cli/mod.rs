//! Command-line interface for contest-forge.
//!
//! Provides the two report subcommands and their shared filter arguments.

mod commands;

pub use commands::{parse_cli, run, run_with_cli};
