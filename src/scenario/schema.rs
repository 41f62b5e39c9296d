//! scenario::schema
//!
//! Scenario schema types.
//!
//! # Shape
//!
//! A scenario describes one scripted day at the store: the customers and
//! their opening carts, how many lanes to open, and an ordered list of
//! steps to apply. Customers are referenced by name, so names must be
//! unique within a scenario even though the store itself allows
//! duplicates.
//!
//! # Validation
//!
//! Values are validated after parsing: names must satisfy
//! [`crate::core::types`] rules, steps may only reference declared
//! customers and open lanes.

use serde::{Deserialize, Serialize};

use super::ScenarioError;
use crate::core::types::{CustomerName, ItemName};

/// A scripted day at the store.
///
/// # Example
///
/// ```toml
/// lanes = 2
///
/// [[customers]]
/// name = "Helen"
/// items = [{ name = "Advil", amount = 30 }]
///
/// [[steps]]
/// op = "enqueue"
/// customer = "Helen"
/// lane = 0
///
/// [[steps]]
/// op = "serve"
/// lane = 0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// Number of lanes to open before the script runs
    pub lanes: usize,

    /// Customers present when the store opens
    pub customers: Vec<CustomerSpec>,

    /// Steps applied in order
    pub steps: Vec<Step>,
}

/// One customer and their opening cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CustomerSpec {
    /// Customer name, unique within the scenario
    pub name: String,

    /// Items placed in the cart before the script runs
    pub items: Vec<ItemSpec>,
}

/// An item line in a scenario cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ItemSpec {
    /// Item name
    pub name: String,

    /// Amount to add; non-positive amounts are applied as no-ops
    pub amount: i64,
}

/// A scripted operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Add items to a customer's cart
    AddItem {
        customer: String,
        item: String,
        amount: i64,
    },

    /// Remove items from a customer's cart
    RemoveItem {
        customer: String,
        item: String,
        amount: i64,
    },

    /// Move a customer into a lane's queue
    Enqueue { customer: String, lane: usize },

    /// Serve the head customer of one lane
    Serve { lane: usize },

    /// Serve the head customer of every lane once
    ServeAll,

    /// Move one customer from the busiest lane to the idlest
    Rebalance,
}

impl Scenario {
    /// Validate the scenario values.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError::InvalidValue` if a name violates the core
    /// naming rules, a customer name is declared twice, or a step
    /// references an unknown customer or lane.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let mut seen = std::collections::HashSet::new();
        for spec in &self.customers {
            CustomerName::new(&spec.name).map_err(|e| {
                ScenarioError::InvalidValue(format!("customer '{}': {}", spec.name, e))
            })?;
            if !seen.insert(spec.name.as_str()) {
                return Err(ScenarioError::InvalidValue(format!(
                    "duplicate customer name '{}'",
                    spec.name
                )));
            }
            for item in &spec.items {
                ItemName::new(&item.name).map_err(|e| {
                    ScenarioError::InvalidValue(format!(
                        "item '{}' for customer '{}': {}",
                        item.name, spec.name, e
                    ))
                })?;
            }
        }

        for (idx, step) in self.steps.iter().enumerate() {
            self.validate_step(idx, step, &seen)?;
        }
        Ok(())
    }

    fn validate_step(
        &self,
        idx: usize,
        step: &Step,
        customers: &std::collections::HashSet<&str>,
    ) -> Result<(), ScenarioError> {
        let check_customer = |name: &str| {
            if customers.contains(name) {
                Ok(())
            } else {
                Err(ScenarioError::InvalidValue(format!(
                    "step {}: unknown customer '{}'",
                    idx + 1,
                    name
                )))
            }
        };
        let check_lane = |lane: usize| {
            if lane < self.lanes {
                Ok(())
            } else {
                Err(ScenarioError::InvalidValue(format!(
                    "step {}: lane {} out of range ({} lanes open)",
                    idx + 1,
                    lane,
                    self.lanes
                )))
            }
        };

        match step {
            Step::AddItem { customer, item, .. } | Step::RemoveItem { customer, item, .. } => {
                check_customer(customer)?;
                ItemName::new(item).map_err(|e| {
                    ScenarioError::InvalidValue(format!("step {}: {}", idx + 1, e))
                })?;
                Ok(())
            }
            Step::Enqueue { customer, lane } => {
                check_customer(customer)?;
                check_lane(*lane)
            }
            Step::Serve { lane } => check_lane(*lane),
            Step::ServeAll | Step::Rebalance => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_toml() -> &'static str {
        r#"
            lanes = 2

            [[customers]]
            name = "Helen"
            items = [{ name = "Advil", amount = 30 }]

            [[customers]]
            name = "Charles"

            [[steps]]
            op = "enqueue"
            customer = "Helen"
            lane = 0

            [[steps]]
            op = "serve"
            lane = 0
        "#
    }

    #[test]
    fn parses_and_validates_minimal_scenario() {
        let scenario: Scenario = toml::from_str(minimal_toml()).unwrap();
        assert_eq!(scenario.lanes, 2);
        assert_eq!(scenario.customers.len(), 2);
        assert_eq!(scenario.steps.len(), 2);
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn step_ops_parse_by_tag() {
        let scenario: Scenario = toml::from_str(
            r#"
                lanes = 1

                [[customers]]
                name = "A"

                [[steps]]
                op = "add_item"
                customer = "A"
                item = "Gum"
                amount = 2

                [[steps]]
                op = "serve_all"

                [[steps]]
                op = "rebalance"
            "#,
        )
        .unwrap();

        assert_eq!(
            scenario.steps[0],
            Step::AddItem {
                customer: "A".into(),
                item: "Gum".into(),
                amount: 2
            }
        );
        assert_eq!(scenario.steps[1], Step::ServeAll);
        assert_eq!(scenario.steps[2], Step::Rebalance);
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<Scenario, _> = toml::from_str("lanes = 1\nshelves = 4\n");
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_customer_rejected() {
        let scenario: Scenario = toml::from_str(
            r#"
                lanes = 1

                [[customers]]
                name = "Helen"

                [[customers]]
                name = "Helen"
            "#,
        )
        .unwrap();

        assert!(scenario.validate().is_err());
    }

    #[test]
    fn unknown_customer_in_step_rejected() {
        let scenario: Scenario = toml::from_str(
            r#"
                lanes = 1

                [[steps]]
                op = "enqueue"
                customer = "Nobody"
                lane = 0
            "#,
        )
        .unwrap();

        assert!(scenario.validate().is_err());
    }

    #[test]
    fn lane_out_of_range_rejected() {
        let scenario: Scenario = toml::from_str(
            r#"
                lanes = 1

                [[steps]]
                op = "serve"
                lane = 3
            "#,
        )
        .unwrap();

        let err = scenario.validate().unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn empty_customer_name_is_valid() {
        let scenario: Scenario = toml::from_str(
            r#"
                lanes = 1

                [[customers]]
                name = ""
            "#,
        )
        .unwrap();

        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn serde_roundtrip() {
        let scenario: Scenario = toml::from_str(minimal_toml()).unwrap();
        let serialized = toml::to_string(&scenario).unwrap();
        let reparsed: Scenario = toml::from_str(&serialized).unwrap();
        assert_eq!(scenario, reparsed);
    }
}
