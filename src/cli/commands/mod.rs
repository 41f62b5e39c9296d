//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into the library to do the work
//! 3. Formats and displays output
//!
//! Handlers do NOT reach into store internals directly.

mod completion;
mod demo;
mod run;

use anyhow::Result;

use super::args::Command;
use crate::ui::output::Verbosity;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, verbosity: Verbosity) -> Result<()> {
    match command {
        Command::Run { scenario, json } => run::run(&scenario, json, verbosity),
        Command::Demo => demo::demo(verbosity),
        Command::Completion { shell } => completion::completion(shell),
    }
}
