//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lanework - a checkout-lane simulator
#[derive(Parser, Debug)]
#[command(name = "lw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute a scenario file and print a run report
    #[command(
        long_about = "Execute a scenario file and print a run report.\n\n\
            A scenario is a TOML file describing customers with their opening \
            carts, the number of lanes to open, and an ordered script of \
            operations: cart edits, enqueues, serves, and rebalances. The \
            scenario is validated before anything runs; a validated scenario \
            always executes to completion."
    )]
    Run {
        /// Path to the scenario TOML file
        scenario: PathBuf,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in demonstration day
    Demo,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
