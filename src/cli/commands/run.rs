//! run command - Execute a scenario file and print a run report

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::scenario;
use crate::ui::output::{self, Verbosity};

/// Execute a scenario file and report the outcome.
pub fn run(path: &Path, json: bool, verbosity: Verbosity) -> Result<()> {
    output::debug(format!("loading scenario from {}", path.display()), verbosity);
    let scenario = scenario::load(path)
        .with_context(|| format!("failed to load scenario '{}'", path.display()))?;

    output::debug(
        format!(
            "executing {} steps over {} lanes",
            scenario.steps.len(),
            scenario.lanes
        ),
        verbosity,
    );
    let report = scenario::execute(&scenario)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print(format!("Scenario: {}", path.display()), verbosity);
        output::print(
            format!("Steps applied: {}", report.steps_applied),
            verbosity,
        );
        output::print(format!("Items served: {}", report.items_served), verbosity);
        output::print(
            format!("Customers moved by rebalancing: {}", report.customers_moved),
            verbosity,
        );
        output::print(
            format!(
                "Lane occupancy before close: {:?}",
                report.lane_counts
            ),
            verbosity,
        );
        if report.floor_remaining > 0 {
            output::print(
                format!("Customers who never queued: {}", report.floor_remaining),
                verbosity,
            );
        }
        output::print(
            format!("Items flushed at close: {}", report.items_flushed_at_close),
            verbosity,
        );
    }

    if !report.verified {
        anyhow::bail!("store failed invariant verification after the script");
    }
    Ok(())
}
