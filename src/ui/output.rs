//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag. The
//! formatting helpers render customers and lanes the way the `demo`
//! command displays them; machine-readable output goes through the
//! `--json` path in the run command instead.

use std::fmt::Display;

use crate::core::customer::Customer;
use crate::core::lane::CheckoutLane;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a customer and their cart for display.
pub fn format_customer(customer: &Customer) -> String {
    let mut out = format!(
        "Customer: {}\n  Cart [{}]:\n",
        customer.name(),
        customer.total_items()
    );
    for entry in customer.cart().entries() {
        out.push_str(&format!("    - {} x {}\n", entry.name(), entry.count()));
    }
    out
}

/// Format a lane's queue for display, head first.
pub fn format_lane(label: &str, lane: &CheckoutLane) -> String {
    let names: Vec<&str> = lane.customers().map(|c| c.name().as_str()).collect();
    format!("{}: -> {}", label, names.join(" "))
}
