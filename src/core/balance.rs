//! core::balance
//!
//! Rebalancing and batch service across an ordered set of lanes.
//!
//! # Design
//!
//! The balancer is stateless: every call recomputes lane occupancy from
//! scratch and moves at most one customer. Busyness is the number of
//! customers in a lane; ties for busiest and idlest both resolve to the
//! earliest lane index, independently. When every lane is equally busy
//! the same lane holds both roles, and only the magnitude check stands
//! between it and a self-move.

use super::lane::CheckoutLane;

/// Whether a rebalancing call moved a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceOutcome {
    /// One customer moved from the busiest lane to the idlest.
    Moved,
    /// No move was needed or possible.
    NotMoved,
}

impl BalanceOutcome {
    /// True if a customer moved.
    pub fn moved(self) -> bool {
        self == BalanceOutcome::Moved
    }
}

/// Move one customer from the busiest lane to the idlest.
///
/// No-op returning [`BalanceOutcome::NotMoved`] when fewer than two lanes
/// are given or when the busiest and idlest lanes differ by at most one
/// customer. Otherwise the busiest lane's tail customer, the one most
/// recently queued, is detached and enqueued at the back of the idlest
/// lane.
///
/// # Example
///
/// ```
/// use lanework::core::balance::{rebalance, BalanceOutcome};
/// use lanework::core::customer::Customer;
/// use lanework::core::lane::CheckoutLane;
/// use lanework::core::types::CustomerName;
///
/// let mut lanes = vec![CheckoutLane::open(), CheckoutLane::open()];
/// for i in 0..3 {
///     lanes[1].enqueue(Customer::new(CustomerName::new(format!("c{i}")).unwrap()));
/// }
///
/// assert_eq!(rebalance(&mut lanes), BalanceOutcome::Moved);
/// assert_eq!(lanes[0].customer_count(), 1);
/// assert_eq!(lanes[1].customer_count(), 2);
/// ```
pub fn rebalance(lanes: &mut [CheckoutLane]) -> BalanceOutcome {
    if lanes.len() < 2 {
        return BalanceOutcome::NotMoved;
    }

    let counts: Vec<usize> = lanes.iter().map(CheckoutLane::customer_count).collect();
    let mut busiest = 0;
    let mut idlest = 0;
    for (idx, &count) in counts.iter().enumerate() {
        if count > counts[busiest] {
            busiest = idx;
        }
        if count < counts[idlest] {
            idlest = idx;
        }
    }

    if counts[busiest] - counts[idlest] <= 1 {
        return BalanceOutcome::NotMoved;
    }

    match lanes[busiest].detach_tail() {
        Some(customer) => {
            lanes[idlest].enqueue(customer);
            BalanceOutcome::Moved
        }
        // A lane two customers busier than another cannot be empty.
        None => BalanceOutcome::NotMoved,
    }
}

/// Serve the head customer of every lane once, in index order.
///
/// Returns the sum of the served item counts; empty lanes contribute
/// zero, as does an empty slice.
pub fn serve_one_each(lanes: &mut [CheckoutLane]) -> i64 {
    lanes.iter_mut().map(CheckoutLane::serve_head).sum()
}

/// Close every lane, serving any customers still queued.
///
/// Lanes are drained in index order and released. Returns the total item
/// count flushed across all lanes.
pub fn close_all(lanes: Vec<CheckoutLane>) -> i64 {
    lanes.into_iter().map(CheckoutLane::drain_and_close).sum()
}
