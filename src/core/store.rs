//! core::store
//!
//! Store registry: the entry-point surface over customers and lanes.
//!
//! # Architecture
//!
//! The store owns two populations: customers still shopping (the floor)
//! and open checkout lanes, in opening order. Callers address both
//! through opaque handles. An operation given a handle that resolves to
//! nothing is a documented no-op or zero-returning call. The registry is
//! where "absent input" from the outside world is absorbed, so the
//! structures underneath never see one.
//!
//! # Ownership
//!
//! Enqueueing moves a customer off the floor and into a lane; from then
//! on the lane owns them and the old handle resolves to nothing. A
//! served customer is released together with their cart.

use std::collections::HashMap;

use super::balance::{self, BalanceOutcome};
use super::customer::Customer;
use super::lane::CheckoutLane;
use super::types::{CustomerName, ItemName};

/// Handle to a customer on the store floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomerId(u64);

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer#{}", self.0)
    }
}

/// Handle to an open checkout lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaneId(usize);

impl LaneId {
    /// The lane's position in opening order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for LaneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lane {}", self.0)
    }
}

/// A store: customers on the floor plus open checkout lanes.
///
/// # Example
///
/// ```
/// use lanework::core::store::Store;
/// use lanework::core::types::{CustomerName, ItemName};
///
/// let mut store = Store::new();
/// let helen = store.create_customer(CustomerName::new("Helen").unwrap());
/// let lane = store.open_lane();
///
/// store.add_item(helen, ItemName::new("Advil").unwrap(), 30);
/// store.enqueue(helen, lane);
///
/// assert_eq!(store.serve_head(lane), 30);
/// ```
#[derive(Debug, Default)]
pub struct Store {
    floor: HashMap<CustomerId, Customer>,
    next_customer: u64,
    lanes: Vec<CheckoutLane>,
}

impl Store {
    /// Open a store with no customers and no lanes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a customer with an empty cart, returning their handle.
    pub fn create_customer(&mut self, name: CustomerName) -> CustomerId {
        let id = CustomerId(self.next_customer);
        self.next_customer += 1;
        self.floor.insert(id, Customer::new(name));
        id
    }

    /// Open a new checkout lane, returning its handle.
    pub fn open_lane(&mut self) -> LaneId {
        self.lanes.push(CheckoutLane::open());
        LaneId(self.lanes.len() - 1)
    }

    /// Add items to a floor customer's cart.
    ///
    /// No-op when the handle is absent or the amount is non-positive.
    pub fn add_item(&mut self, customer: CustomerId, item: ItemName, amount: i64) {
        if let Some(c) = self.floor.get_mut(&customer) {
            c.cart_mut().add(item, amount);
        }
    }

    /// Remove items from a floor customer's cart.
    ///
    /// No-op when the handle is absent, the amount is non-positive, or
    /// no matching entry exists.
    pub fn remove_item(&mut self, customer: CustomerId, item: &ItemName, amount: i64) {
        if let Some(c) = self.floor.get_mut(&customer) {
            c.cart_mut().remove(item, amount);
        }
    }

    /// Total items in a floor customer's cart. Zero when absent.
    pub fn total_items(&self, customer: CustomerId) -> i64 {
        self.floor
            .get(&customer)
            .map_or(0, Customer::total_items)
    }

    /// Move a customer from the floor to the back of a lane.
    ///
    /// No-op when either handle is absent; the customer stays on the
    /// floor unless a real lane receives them.
    pub fn enqueue(&mut self, customer: CustomerId, lane: LaneId) {
        if lane.0 >= self.lanes.len() {
            return;
        }
        if let Some(c) = self.floor.remove(&customer) {
            self.lanes[lane.0].enqueue(c);
        }
    }

    /// Serve the head customer of a lane.
    ///
    /// Returns the item count served, or 0 when the lane handle is
    /// absent or the lane is empty.
    pub fn serve_head(&mut self, lane: LaneId) -> i64 {
        self.lanes.get_mut(lane.0).map_or(0, CheckoutLane::serve_head)
    }

    /// Number of customers queued in a lane. Zero when absent or empty.
    pub fn customer_count(&self, lane: LaneId) -> usize {
        self.lanes.get(lane.0).map_or(0, CheckoutLane::customer_count)
    }

    /// Move one customer from the busiest lane to the idlest.
    ///
    /// Operates over every open lane in opening order; see
    /// [`balance::rebalance`] for the selection and magnitude rules.
    pub fn rebalance(&mut self) -> BalanceOutcome {
        balance::rebalance(&mut self.lanes)
    }

    /// Serve the head customer of every open lane once, in opening
    /// order, returning the summed item counts.
    pub fn serve_one_each(&mut self) -> i64 {
        balance::serve_one_each(&mut self.lanes)
    }

    /// Close the store: drain every lane, releasing all remaining
    /// customers, and return the total item count flushed.
    ///
    /// Customers still on the floor are released without being served.
    pub fn close(self) -> i64 {
        balance::close_all(self.lanes)
    }

    /// Read access to a floor customer.
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.floor.get(&id)
    }

    /// Read access to a lane.
    pub fn lane(&self, id: LaneId) -> Option<&CheckoutLane> {
        self.lanes.get(id.0)
    }

    /// All open lanes in opening order.
    pub fn lanes(&self) -> &[CheckoutLane] {
        &self.lanes
    }

    /// Number of open lanes.
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Number of customers still on the floor.
    pub fn floor_count(&self) -> usize {
        self.floor.len()
    }

    /// Iterate customers still on the floor, in no particular order.
    pub fn floor_customers(&self) -> impl Iterator<Item = &Customer> {
        self.floor.values()
    }
}
