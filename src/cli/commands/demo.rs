//! demo command - Run the built-in demonstration day
//!
//! Walks through the store's moving parts in order: a cart filling up in
//! sorted order, a single lane serving in arrival order, and three
//! unevenly loaded lanes being rebalanced, then closed.

use anyhow::Result;

use crate::core::store::Store;
use crate::core::types::{CustomerName, ItemName};
use crate::ui::output::{self, Verbosity};

/// Run the demonstration day.
pub fn demo(verbosity: Verbosity) -> Result<()> {
    cart_demo(verbosity)?;
    lanes_demo(verbosity)?;
    Ok(())
}

/// Fill one cart out of order and show it comes back sorted.
fn cart_demo(verbosity: Verbosity) -> Result<()> {
    let mut store = Store::new();
    let charles = store.create_customer(CustomerName::new("Charles")?);
    for (item, amount) in [("bAnAnA", 63), ("duRiAn", 55), ("AppLe", 42), ("CheRRy", 23)] {
        store.add_item(charles, ItemName::new(item)?, amount);
    }

    if let Some(customer) = store.customer(charles) {
        output::print(output::format_customer(customer), verbosity);
    }
    store.close();
    Ok(())
}

/// Load three lanes unevenly, rebalance twice, then close the store.
fn lanes_demo(verbosity: Verbosity) -> Result<()> {
    let mut store = Store::new();
    let lanes = [store.open_lane(), store.open_lane(), store.open_lane()];

    let arrivals: [(&str, usize); 9] = [
        ("Alex", 0),
        ("Billy", 1),
        ("Charles", 1),
        ("Devin", 1),
        ("Eric", 1),
        ("Frank", 2),
        ("Gary", 2),
        ("Henry", 2),
        ("Issac", 2),
    ];
    for (name, lane) in arrivals {
        let id = store.create_customer(CustomerName::new(name)?);
        store.enqueue(id, lanes[lane]);
    }

    output::print("Showing initial lanes...", verbosity);
    print_lanes(&store, verbosity);

    for round in 1..=2 {
        let outcome = store.rebalance();
        output::debug(format!("rebalance round {round}: {outcome:?}"), verbosity);
        output::print("Showing lanes after rebalancing...", verbosity);
        print_lanes(&store, verbosity);
    }

    let flushed = store.close();
    output::print(
        format!("Store closed; {flushed} items flushed."),
        verbosity,
    );
    Ok(())
}

fn print_lanes(store: &Store, verbosity: Verbosity) {
    for (idx, lane) in store.lanes().iter().enumerate() {
        let label = format!("Lane {}", idx + 1);
        output::print(output::format_lane(&label, lane), verbosity);
    }
    output::print("", verbosity);
}
