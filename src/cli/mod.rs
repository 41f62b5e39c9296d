//! cli
//!
//! Command-line interface layer for Lanework.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT mutate store state directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! command handlers, which drive the [`crate::core`] and
//! [`crate::scenario`] APIs.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::Result;

use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    commands::dispatch(cli.command, verbosity)
}
