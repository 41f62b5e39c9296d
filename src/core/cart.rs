//! core::cart
//!
//! Cart contents: a sorted, unique collection of item entries.
//!
//! # Invariants
//!
//! - Entries are strictly ascending by byte-wise comparison of item name
//! - No two entries share a name
//! - Every entry's count is positive
//!
//! An entry whose count would drop to zero or below is removed, never
//! stored at a non-positive count. Mutations that cannot satisfy their
//! preconditions (non-positive amount, missing entry) are no-ops.

use super::types::ItemName;

/// A single item entry in a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    name: ItemName,
    count: i64,
}

impl ItemEntry {
    /// The item's name.
    pub fn name(&self) -> &ItemName {
        &self.name
    }

    /// How many of this item the cart holds. Always positive.
    pub fn count(&self) -> i64 {
        self.count
    }
}

/// An ordering fault found in a cart's entries.
///
/// Reachable only through internal errors; the public mutation API
/// preserves the cart invariants. [`crate::core::verify`] turns a fault
/// into a verification error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderFault {
    /// Two adjacent entries are out of ascending order.
    OutOfOrder { first: ItemName, second: ItemName },
    /// Two adjacent entries share a name.
    Duplicate { name: ItemName },
    /// An entry holds a non-positive count.
    NonPositiveCount { name: ItemName, count: i64 },
}

/// A customer's cart.
///
/// Entries stay sorted by byte-wise name order and unique by name. The
/// sort position is found with binary search; carts are small, so the
/// log-factor is a nicety rather than a requirement.
///
/// # Example
///
/// ```
/// use lanework::core::cart::Cart;
/// use lanework::core::types::ItemName;
///
/// let mut cart = Cart::new();
/// cart.add(ItemName::new("bAnAnA").unwrap(), 63);
/// cart.add(ItemName::new("AppLe").unwrap(), 42);
///
/// // Byte-wise order puts the uppercase-leading name first.
/// let names: Vec<_> = cart.entries().map(|e| e.name().as_str().to_string()).collect();
/// assert_eq!(names, vec!["AppLe", "bAnAnA"]);
/// assert_eq!(cart.total_items(), 105);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<ItemEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` of an item.
    ///
    /// No-op when `amount <= 0`. If the cart already holds an entry with
    /// the same name, its count is increased; otherwise a new entry is
    /// inserted at its sort position, which may be before the current
    /// first entry or past the current last.
    pub fn add(&mut self, name: ItemName, amount: i64) {
        if amount <= 0 {
            return;
        }
        match self.entries.binary_search_by(|e| e.name.cmp(&name)) {
            Ok(idx) => self.entries[idx].count += amount,
            Err(idx) => self.entries.insert(
                idx,
                ItemEntry {
                    name,
                    count: amount,
                },
            ),
        }
    }

    /// Reduce the count of an item by `amount`.
    ///
    /// No-op when `amount <= 0` or when no entry matches the name. If the
    /// reduced count reaches zero or below, the entry is removed.
    pub fn remove(&mut self, name: &ItemName, amount: i64) {
        if amount <= 0 {
            return;
        }
        if let Ok(idx) = self.entries.binary_search_by(|e| e.name.cmp(name)) {
            self.entries[idx].count -= amount;
            if self.entries[idx].count <= 0 {
                self.entries.remove(idx);
            }
        }
    }

    /// Total number of items across all entries. Zero for an empty cart.
    pub fn total_items(&self) -> i64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &ItemName) -> Option<&ItemEntry> {
        self.entries
            .binary_search_by(|e| e.name.cmp(name))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending name order.
    pub fn entries(&self) -> impl Iterator<Item = &ItemEntry> {
        self.entries.iter()
    }

    /// Check the cart invariants, returning the first fault found.
    ///
    /// Returns `None` when the entries are strictly ascending, unique,
    /// and all counts are positive.
    pub fn find_order_fault(&self) -> Option<OrderFault> {
        for entry in &self.entries {
            if entry.count <= 0 {
                return Some(OrderFault::NonPositiveCount {
                    name: entry.name.clone(),
                    count: entry.count,
                });
            }
        }
        for pair in self.entries.windows(2) {
            match pair[0].name.cmp(&pair[1].name) {
                std::cmp::Ordering::Less => {}
                std::cmp::Ordering::Equal => {
                    return Some(OrderFault::Duplicate {
                        name: pair[0].name.clone(),
                    })
                }
                std::cmp::Ordering::Greater => {
                    return Some(OrderFault::OutOfOrder {
                        first: pair[0].name.clone(),
                        second: pair[1].name.clone(),
                    })
                }
            }
        }
        None
    }

    /// Build a cart from raw entries, bypassing the sorted-insert path.
    #[cfg(test)]
    pub(crate) fn from_raw_entries(entries: Vec<(ItemName, i64)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, count)| ItemEntry { name, count })
                .collect(),
        }
    }
}
