//! scenario
//!
//! Scripted store days: loading, validation, and execution.
//!
//! # Overview
//!
//! A scenario is a TOML file describing customers with their opening
//! carts, a number of lanes, and an ordered script of operations.
//! Executing a scenario replays the script against a fresh
//! [`Store`](crate::core::store::Store) and produces a [`RunReport`].
//!
//! Once a scenario validates, execution cannot fail: every scripted
//! operation resolves to a store operation, and store operations absorb
//! degenerate inputs as no-ops.
//!
//! # Example
//!
//! ```
//! use lanework::scenario::{self, Scenario};
//!
//! let scenario: Scenario = toml::from_str(r#"
//!     lanes = 1
//!
//!     [[customers]]
//!     name = "Helen"
//!     items = [{ name = "Advil", amount = 30 }]
//!
//!     [[steps]]
//!     op = "enqueue"
//!     customer = "Helen"
//!     lane = 0
//!
//!     [[steps]]
//!     op = "serve"
//!     lane = 0
//! "#).unwrap();
//!
//! let report = scenario::execute(&scenario).unwrap();
//! assert_eq!(report.items_served, 30);
//! ```

pub mod schema;

pub use schema::{CustomerSpec, ItemSpec, Scenario, Step};

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::core::store::{CustomerId, Store};
use crate::core::types::{CustomerName, ItemName, UtcTimestamp};
use crate::core::verify;

/// Errors from scenario loading and execution.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse scenario file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid scenario value: {0}")]
    InvalidValue(String),
}

/// Load and validate a scenario from a TOML file.
///
/// # Errors
///
/// Returns `ScenarioError` when the file cannot be read, does not parse
/// as a scenario, or fails validation.
pub fn load(path: &Path) -> Result<Scenario, ScenarioError> {
    let raw = fs::read_to_string(path).map_err(|source| ScenarioError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario: Scenario = toml::from_str(&raw).map_err(|e| ScenarioError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    scenario.validate()?;
    Ok(scenario)
}

/// What one scenario run did.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// When execution started
    pub started_at: UtcTimestamp,

    /// When execution finished
    pub finished_at: UtcTimestamp,

    /// Steps applied, in script order
    pub steps_applied: usize,

    /// Items served by scripted serve steps
    pub items_served: i64,

    /// Customers moved by scripted rebalance steps
    pub customers_moved: usize,

    /// Customers per lane after the script, before closing
    pub lane_counts: Vec<usize>,

    /// Customers who never joined a lane
    pub floor_remaining: usize,

    /// Items flushed while closing the store
    pub items_flushed_at_close: i64,

    /// Whether the store passed invariant verification after the script
    pub verified: bool,
}

/// Execute a scenario against a fresh store.
///
/// Validates first, then opens lanes, seeds customers and carts, applies
/// every step in order, verifies the store, and closes it.
///
/// # Errors
///
/// Returns `ScenarioError::InvalidValue` when validation fails; a
/// validated scenario always executes to completion.
pub fn execute(scenario: &Scenario) -> Result<RunReport, ScenarioError> {
    scenario.validate()?;

    let started_at = UtcTimestamp::now();
    let mut store = Store::new();

    let lanes: Vec<_> = (0..scenario.lanes).map(|_| store.open_lane()).collect();

    let mut handles: HashMap<&str, CustomerId> = HashMap::new();
    for spec in &scenario.customers {
        let name = CustomerName::new(&spec.name)
            .map_err(|e| ScenarioError::InvalidValue(e.to_string()))?;
        let id = store.create_customer(name);
        for item in &spec.items {
            let item_name = ItemName::new(&item.name)
                .map_err(|e| ScenarioError::InvalidValue(e.to_string()))?;
            store.add_item(id, item_name, item.amount);
        }
        handles.insert(spec.name.as_str(), id);
    }

    let mut items_served = 0;
    let mut customers_moved = 0;
    for step in &scenario.steps {
        match step {
            Step::AddItem {
                customer,
                item,
                amount,
            } => {
                let item_name = ItemName::new(item)
                    .map_err(|e| ScenarioError::InvalidValue(e.to_string()))?;
                if let Some(&id) = handles.get(customer.as_str()) {
                    store.add_item(id, item_name, *amount);
                }
            }
            Step::RemoveItem {
                customer,
                item,
                amount,
            } => {
                let item_name = ItemName::new(item)
                    .map_err(|e| ScenarioError::InvalidValue(e.to_string()))?;
                if let Some(&id) = handles.get(customer.as_str()) {
                    store.remove_item(id, &item_name, *amount);
                }
            }
            Step::Enqueue { customer, lane } => {
                if let Some(&id) = handles.get(customer.as_str()) {
                    store.enqueue(id, lanes[*lane]);
                }
            }
            Step::Serve { lane } => {
                items_served += store.serve_head(lanes[*lane]);
            }
            Step::ServeAll => {
                items_served += store.serve_one_each();
            }
            Step::Rebalance => {
                if store.rebalance().moved() {
                    customers_moved += 1;
                }
            }
        }
    }

    let lane_counts = store
        .lanes()
        .iter()
        .map(|lane| lane.customer_count())
        .collect();
    let floor_remaining = store.floor_count();
    let verified = verify::fast_verify(&store).ok;
    let items_flushed_at_close = store.close();

    Ok(RunReport {
        started_at,
        finished_at: UtcTimestamp::now(),
        steps_applied: scenario.steps.len(),
        items_served,
        customers_moved,
        lane_counts,
        floor_remaining,
        items_flushed_at_close,
        verified,
    })
}
