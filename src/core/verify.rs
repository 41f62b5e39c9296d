//! core::verify
//!
//! Fast verification of store invariants.
//!
//! # Checks
//!
//! - **Carts**: entries strictly ascending by byte-wise name order,
//!   pairwise unique, every count positive
//! - **Lanes**: head/tail agreement, forward chain from head ends at the
//!   tail, backward links mirror forward links, no vacant or stranded
//!   slots
//!
//! # Invariants
//!
//! - Never mutates the store
//! - Must be deterministic

use thiserror::Error;

use super::cart::{Cart, OrderFault};
use super::lane::{CheckoutLane, LinkFault};
use super::store::Store;

/// Errors from verification.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("cart for '{customer}' violates ordering: {fault:?}")]
    CartFault { customer: String, fault: OrderFault },

    #[error("lane {lane} chain fault: {fault:?}")]
    LaneFault { lane: usize, fault: LinkFault },
}

/// Result of fast verification.
#[derive(Debug)]
pub struct VerifyResult {
    /// Whether verification passed
    pub ok: bool,
    /// Errors found during verification
    pub errors: Vec<VerifyError>,
}

impl VerifyResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: vec![],
        }
    }

    /// Create a failed result with errors.
    pub fn failure(errors: Vec<VerifyError>) -> Self {
        Self { ok: false, errors }
    }
}

/// Verify a single cart.
pub fn verify_cart(owner: &str, cart: &Cart) -> Option<VerifyError> {
    cart.find_order_fault().map(|fault| VerifyError::CartFault {
        customer: owner.to_string(),
        fault,
    })
}

/// Verify a single lane's chain and every queued cart.
pub fn verify_lane(index: usize, lane: &CheckoutLane) -> Vec<VerifyError> {
    let mut errors = Vec::new();
    if let Some(fault) = lane.find_link_fault() {
        errors.push(VerifyError::LaneFault { lane: index, fault });
    }
    for customer in lane.customers() {
        if let Some(err) = verify_cart(customer.name().as_str(), customer.cart()) {
            errors.push(err);
        }
    }
    errors
}

/// Perform fast verification of an entire store.
///
/// Checks every lane chain and every cart, on the floor and queued.
pub fn fast_verify(store: &Store) -> VerifyResult {
    let mut errors = Vec::new();

    for (index, lane) in store.lanes().iter().enumerate() {
        errors.extend(verify_lane(index, lane));
    }
    for customer in store.floor_customers() {
        if let Some(err) = verify_cart(customer.name().as_str(), customer.cart()) {
            errors.push(err);
        }
    }

    if errors.is_empty() {
        VerifyResult::success()
    } else {
        VerifyResult::failure(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CustomerName, ItemName};

    #[test]
    fn empty_store_verifies() {
        let store = Store::new();
        assert!(fast_verify(&store).ok);
    }

    #[test]
    fn busy_store_verifies_after_mixed_operations() {
        let mut store = Store::new();
        let lane0 = store.open_lane();
        let lane1 = store.open_lane();

        for i in 0..5 {
            let id = store.create_customer(CustomerName::new(format!("c{i}")).unwrap());
            store.add_item(id, ItemName::new("bAnAnA").unwrap(), 63);
            store.add_item(id, ItemName::new("AppLe").unwrap(), 42);
            store.add_item(id, ItemName::new("AppLe").unwrap(), 1);
            store.enqueue(id, if i % 2 == 0 { lane0 } else { lane1 });
        }
        store.serve_head(lane0);
        store.rebalance();

        let result = fast_verify(&store);
        assert!(result.ok, "unexpected faults: {:?}", result.errors);
    }

    #[test]
    fn floor_customers_are_checked_too() {
        let mut store = Store::new();
        let id = store.create_customer(CustomerName::new("Bob").unwrap());
        store.add_item(id, ItemName::new("Lemons").unwrap(), 49);

        assert!(fast_verify(&store).ok);
    }
}
