//! core::customer
//!
//! A customer and the cart they own.

use super::cart::Cart;
use super::types::CustomerName;

/// A customer shopping in the store.
///
/// Created with an empty cart and mutated only through cart operations.
/// The cart's lifetime is the customer's: dropping the customer drops the
/// cart and everything in it.
///
/// # Example
///
/// ```
/// use lanework::core::customer::Customer;
/// use lanework::core::types::{CustomerName, ItemName};
///
/// let mut helen = Customer::new(CustomerName::new("Helen").unwrap());
/// helen.cart_mut().add(ItemName::new("Advil").unwrap(), 30);
/// helen.cart_mut().add(ItemName::new("Pikachu Plushie").unwrap(), 1);
///
/// assert_eq!(helen.total_items(), 31);
/// ```
#[derive(Debug, Clone)]
pub struct Customer {
    name: CustomerName,
    cart: Cart,
}

impl Customer {
    /// Create a customer with an empty cart.
    pub fn new(name: CustomerName) -> Self {
        Self {
            name,
            cart: Cart::new(),
        }
    }

    /// The customer's name.
    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access to the cart.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Total items in the cart. Zero when the cart is empty.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ItemName;

    #[test]
    fn new_customer_has_empty_cart() {
        let customer = Customer::new(CustomerName::new("Charles").unwrap());

        assert!(customer.cart().is_empty());
        assert_eq!(customer.total_items(), 0);
    }

    #[test]
    fn cart_mutations_flow_through_customer() {
        let mut customer = Customer::new(CustomerName::new("Charles").unwrap());
        customer.cart_mut().add(ItemName::new("RP").unwrap(), 10_000);

        assert_eq!(customer.total_items(), 10_000);
    }

    #[test]
    fn empty_name_customer_is_valid() {
        let customer = Customer::new(CustomerName::new("").unwrap());
        assert_eq!(customer.name().as_str(), "");
    }
}
