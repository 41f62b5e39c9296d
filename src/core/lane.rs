//! core::lane
//!
//! Checkout lane: a FIFO queue of customers.
//!
//! # Architecture
//!
//! The lane is an arena of slots plus head/tail indices. Each occupied
//! slot carries two links named for the direction they point, not for a
//! position: `toward_head` always points toward the next customer to be
//! served, `toward_tail` toward the most recently queued one. Served or
//! detached slots go on a free list and are reused by later enqueues.
//!
//! # Invariants
//!
//! - `head` and `tail` are both set or both unset
//! - A single-customer lane has `head == tail`
//! - The chain from `head` via `toward_tail` links ends exactly at `tail`,
//!   and the chain from `tail` via `toward_head` links mirrors it
//! - Every occupied slot is on that chain; end links are unset
//!
//! Service is strictly first-in, first-out: customers leave the lane in
//! arrival order, except for the tail customer a rebalancing move may
//! detach (see [`crate::core::balance`]).

use super::customer::Customer;

/// Index of a slot in a lane's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlotId(usize);

/// One slot in the arena. Vacant when `customer` is `None`.
#[derive(Debug, Clone)]
struct Slot {
    customer: Option<Customer>,
    toward_head: Option<SlotId>,
    toward_tail: Option<SlotId>,
}

/// A link fault found in a lane's chain.
///
/// Reachable only through internal errors; the public mutation API
/// preserves the lane invariants. [`crate::core::verify`] turns a fault
/// into a verification error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkFault {
    /// Exactly one of head/tail is set.
    HeadTailDisagree,
    /// The forward chain revisits a slot.
    ChainCycle,
    /// The forward chain does not end at the tail, or an end link is
    /// still set.
    ChainEndMismatch,
    /// A forward link is not mirrored by the matching backward link.
    AsymmetricLink { position: usize },
    /// The chain passes through a vacant slot.
    VacantSlotOnChain { position: usize },
    /// Occupied slots exist that the chain never reaches.
    StrandedCustomer { off_chain: usize },
}

/// A checkout lane.
///
/// # Example
///
/// ```
/// use lanework::core::customer::Customer;
/// use lanework::core::lane::CheckoutLane;
/// use lanework::core::types::{CustomerName, ItemName};
///
/// let mut lane = CheckoutLane::open();
///
/// let mut helen = Customer::new(CustomerName::new("Helen").unwrap());
/// helen.cart_mut().add(ItemName::new("Advil").unwrap(), 30);
/// helen.cart_mut().add(ItemName::new("Pikachu Plushie").unwrap(), 1);
/// lane.enqueue(helen);
///
/// assert_eq!(lane.customer_count(), 1);
/// assert_eq!(lane.serve_head(), 31);
/// assert!(lane.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CheckoutLane {
    slots: Vec<Slot>,
    free: Vec<SlotId>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl CheckoutLane {
    /// Open a new, empty lane.
    pub fn open() -> Self {
        Self::default()
    }

    /// Whether the lane has no customers.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Add a customer to the back of the lane.
    ///
    /// The lane takes ownership; the customer stays in the lane until
    /// served or detached by a rebalancing move.
    pub fn enqueue(&mut self, customer: Customer) {
        let id = self.alloc(customer);
        match self.tail {
            Some(tail_id) => {
                self.slots[id.0].toward_head = Some(tail_id);
                self.slots[tail_id.0].toward_tail = Some(id);
                self.tail = Some(id);
            }
            None => {
                self.head = Some(id);
                self.tail = Some(id);
            }
        }
    }

    /// Serve the customer at the head of the lane.
    ///
    /// Computes the customer's total item count, releases the customer
    /// and their cart, and advances the head. Returns the item count
    /// served, or 0 when the lane is empty.
    pub fn serve_head(&mut self) -> i64 {
        let Some(head_id) = self.head else {
            return 0;
        };
        let Some(customer) = self.slots[head_id.0].customer.take() else {
            return 0;
        };
        let served = customer.total_items();

        let next = self.slots[head_id.0].toward_tail.take();
        self.slots[head_id.0].toward_head = None;
        self.free.push(head_id);
        match next {
            Some(next_id) => {
                self.slots[next_id.0].toward_head = None;
                self.head = Some(next_id);
            }
            None => {
                // Head was also the tail; the lane is now empty.
                self.head = None;
                self.tail = None;
            }
        }
        served
    }

    /// Detach and return the customer at the tail of the lane.
    ///
    /// The most recently queued customer leaves the lane with their cart
    /// intact; the predecessor (if any) becomes the new tail. Returns
    /// `None` when the lane is empty. This is the donor half of a
    /// rebalancing move.
    pub fn detach_tail(&mut self) -> Option<Customer> {
        let tail_id = self.tail?;
        let customer = self.slots[tail_id.0].customer.take()?;

        let prev = self.slots[tail_id.0].toward_head.take();
        self.free.push(tail_id);
        match prev {
            Some(prev_id) => {
                self.slots[prev_id.0].toward_tail = None;
                self.tail = Some(prev_id);
            }
            None => {
                self.head = None;
                self.tail = None;
            }
        }
        Some(customer)
    }

    /// Count the customers in the lane.
    ///
    /// Walks the chain from head toward tail, both endpoints included.
    /// Zero for an empty lane.
    pub fn customer_count(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            count += 1;
            cursor = self.slots[id.0].toward_tail;
        }
        count
    }

    /// The customer who will be served next, if any.
    pub fn head_customer(&self) -> Option<&Customer> {
        self.head.and_then(|id| self.slots[id.0].customer.as_ref())
    }

    /// The most recently queued customer, if any.
    pub fn tail_customer(&self) -> Option<&Customer> {
        self.tail.and_then(|id| self.slots[id.0].customer.as_ref())
    }

    /// Iterate customers in service order, head first.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        std::iter::successors(self.head, move |&id| self.slots[id.0].toward_tail)
            .filter_map(move |id| self.slots[id.0].customer.as_ref())
    }

    /// Serve every remaining customer, then release the lane.
    ///
    /// Returns the total item count flushed while draining.
    pub fn drain_and_close(mut self) -> i64 {
        let mut total = 0;
        while !self.is_empty() {
            total += self.serve_head();
        }
        total
    }

    /// Check the chain invariants, returning the first fault found.
    pub fn find_link_fault(&self) -> Option<LinkFault> {
        let (head, tail) = match (self.head, self.tail) {
            (None, None) => {
                let stranded = self.slots.iter().filter(|s| s.customer.is_some()).count();
                if stranded > 0 {
                    return Some(LinkFault::StrandedCustomer {
                        off_chain: stranded,
                    });
                }
                return None;
            }
            (Some(h), Some(t)) => (h, t),
            _ => return Some(LinkFault::HeadTailDisagree),
        };

        if self.slots[head.0].toward_head.is_some() || self.slots[tail.0].toward_tail.is_some() {
            return Some(LinkFault::ChainEndMismatch);
        }

        let mut visited = 0;
        let mut cursor = head;
        loop {
            if visited >= self.slots.len() {
                return Some(LinkFault::ChainCycle);
            }
            if self.slots[cursor.0].customer.is_none() {
                return Some(LinkFault::VacantSlotOnChain { position: visited });
            }
            visited += 1;

            match self.slots[cursor.0].toward_tail {
                Some(next) => {
                    if self.slots[next.0].toward_head != Some(cursor) {
                        return Some(LinkFault::AsymmetricLink { position: visited });
                    }
                    cursor = next;
                }
                None => break,
            }
        }
        if cursor != tail {
            return Some(LinkFault::ChainEndMismatch);
        }

        let occupied = self.slots.iter().filter(|s| s.customer.is_some()).count();
        if occupied != visited {
            return Some(LinkFault::StrandedCustomer {
                off_chain: occupied - visited,
            });
        }
        None
    }

    /// Place a customer in a fresh or recycled slot, links unset.
    fn alloc(&mut self, customer: Customer) -> SlotId {
        let slot = Slot {
            customer: Some(customer),
            toward_head: None,
            toward_tail: None,
        };
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = slot;
                id
            }
            None => {
                self.slots.push(slot);
                SlotId(self.slots.len() - 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CustomerName, ItemName};

    fn customer(name: &str) -> Customer {
        Customer::new(CustomerName::new(name).unwrap())
    }

    fn customer_with_items(name: &str, items: &[(&str, i64)]) -> Customer {
        let mut c = customer(name);
        for (item, amount) in items {
            c.cart_mut().add(ItemName::new(*item).unwrap(), *amount);
        }
        c
    }

    fn queued_names(lane: &CheckoutLane) -> Vec<String> {
        lane.customers()
            .map(|c| c.name().as_str().to_string())
            .collect()
    }

    mod enqueue {
        use super::*;

        #[test]
        fn open_lane_is_empty() {
            let lane = CheckoutLane::open();
            assert!(lane.is_empty());
            assert_eq!(lane.customer_count(), 0);
        }

        #[test]
        fn first_customer_is_head_and_tail() {
            let mut lane = CheckoutLane::open();
            lane.enqueue(customer("Robert Jr."));

            assert_eq!(lane.customer_count(), 1);
            assert_eq!(lane.head_customer().unwrap().name().as_str(), "Robert Jr.");
            assert_eq!(lane.tail_customer().unwrap().name().as_str(), "Robert Jr.");
        }

        #[test]
        fn later_customers_join_the_back() {
            let mut lane = CheckoutLane::open();
            lane.enqueue(customer("R"));
            lane.enqueue(customer("A"));
            lane.enqueue(customer("Z"));

            assert_eq!(queued_names(&lane), vec!["R", "A", "Z"]);
            assert_eq!(lane.head_customer().unwrap().name().as_str(), "R");
            assert_eq!(lane.tail_customer().unwrap().name().as_str(), "Z");
        }
    }

    mod serve {
        use super::*;

        #[test]
        fn serving_empty_lane_returns_zero() {
            let mut lane = CheckoutLane::open();
            assert_eq!(lane.serve_head(), 0);
        }

        #[test]
        fn serves_in_arrival_order_with_item_totals() {
            let mut lane = CheckoutLane::open();
            lane.enqueue(customer_with_items(
                "Helen",
                &[("Pikachu Plushie", 1), ("Advil", 30)],
            ));
            lane.enqueue(customer_with_items("Charles", &[("RP", 10_000)]));

            assert_eq!(lane.serve_head(), 31);
            assert_eq!(lane.serve_head(), 10_000);
            assert_eq!(lane.serve_head(), 0);
            assert!(lane.is_empty());
        }

        #[test]
        fn single_customer_serve_empties_lane() {
            let mut lane = CheckoutLane::open();
            lane.enqueue(customer("G"));

            assert_eq!(lane.serve_head(), 0);
            assert!(lane.is_empty());
            assert!(lane.head_customer().is_none());
            assert!(lane.tail_customer().is_none());
        }

        #[test]
        fn three_serves_leave_last_of_four() {
            let mut lane = CheckoutLane::open();
            for name in ["A", "B", "C", "D"] {
                lane.enqueue(customer(name));
            }

            lane.serve_head();
            lane.serve_head();
            lane.serve_head();

            assert_eq!(queued_names(&lane), vec!["D"]);
        }

        #[test]
        fn served_slots_are_recycled() {
            let mut lane = CheckoutLane::open();
            for round in 0..5 {
                lane.enqueue(customer(&format!("first-{round}")));
                lane.enqueue(customer(&format!("second-{round}")));
                lane.serve_head();
                lane.serve_head();
            }

            assert!(lane.is_empty());
            // Two slots suffice for a lane that never holds more than two.
            assert!(lane.slots.len() <= 2);
        }
    }

    mod detach {
        use super::*;

        #[test]
        fn detach_from_empty_lane_is_none() {
            let mut lane = CheckoutLane::open();
            assert!(lane.detach_tail().is_none());
        }

        #[test]
        fn detaching_sole_customer_empties_lane() {
            let mut lane = CheckoutLane::open();
            lane.enqueue(customer_with_items("Eric", &[("Gum", 2)]));

            let eric = lane.detach_tail().unwrap();
            assert_eq!(eric.name().as_str(), "Eric");
            assert_eq!(eric.total_items(), 2);
            assert!(lane.is_empty());
        }

        #[test]
        fn detaches_most_recently_queued() {
            let mut lane = CheckoutLane::open();
            lane.enqueue(customer("Billy"));
            lane.enqueue(customer("Charles"));
            lane.enqueue(customer("Devin"));
            lane.enqueue(customer("Eric"));

            let moved = lane.detach_tail().unwrap();
            assert_eq!(moved.name().as_str(), "Eric");
            assert_eq!(queued_names(&lane), vec!["Billy", "Charles", "Devin"]);
            assert_eq!(lane.tail_customer().unwrap().name().as_str(), "Devin");
        }

        #[test]
        fn detached_customer_keeps_cart() {
            let mut lane = CheckoutLane::open();
            lane.enqueue(customer_with_items("Eric", &[("Milk", 3), ("Eggs", 12)]));
            lane.enqueue(customer("Frank"));

            let frank = lane.detach_tail().unwrap();
            assert_eq!(frank.total_items(), 0);
            assert_eq!(lane.head_customer().unwrap().total_items(), 15);
        }
    }

    mod drain {
        use super::*;

        #[test]
        fn drain_empty_lane_flushes_nothing() {
            assert_eq!(CheckoutLane::open().drain_and_close(), 0);
        }

        #[test]
        fn drain_serves_everyone() {
            let mut lane = CheckoutLane::open();
            lane.enqueue(customer_with_items("Robert", &[("Apples", 500)]));
            lane.enqueue(customer_with_items(
                "Jack",
                &[("Orange", 10), ("Bananas", 1000)],
            ));
            lane.enqueue(customer("Peter"));

            assert_eq!(lane.drain_and_close(), 1510);
        }
    }

    mod link_fault {
        use super::*;

        #[test]
        fn empty_lane_has_no_fault() {
            assert_eq!(CheckoutLane::open().find_link_fault(), None);
        }

        #[test]
        fn chain_stays_consistent_through_operations() {
            let mut lane = CheckoutLane::open();
            for name in ["Alex", "Billy", "Charles", "Devin"] {
                lane.enqueue(customer(name));
                assert_eq!(lane.find_link_fault(), None);
            }
            lane.serve_head();
            assert_eq!(lane.find_link_fault(), None);
            lane.detach_tail();
            assert_eq!(lane.find_link_fault(), None);
            lane.serve_head();
            lane.serve_head();
            assert_eq!(lane.find_link_fault(), None);
            assert!(lane.is_empty());
        }

        #[test]
        fn recycled_slots_keep_chain_consistent() {
            let mut lane = CheckoutLane::open();
            lane.enqueue(customer("A"));
            lane.enqueue(customer("B"));
            lane.serve_head();
            lane.enqueue(customer("C"));
            lane.enqueue(customer("D"));

            assert_eq!(lane.find_link_fault(), None);
            assert_eq!(queued_names(&lane), vec!["B", "C", "D"]);
        }
    }
}
