//! Command-line interface for verse-forge.
//!
//! Provides the `compose` command for generating poems and the `structures`
//! command for the poem-structure reference guide.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, Cli, Commands, ComposeArgs};
