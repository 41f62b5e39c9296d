//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`ItemName`] - Validated item name, ordered byte-wise
//! - [`CustomerName`] - Validated customer name
//! - [`UtcTimestamp`] - RFC3339 timestamp for run reports
//!
//! # Validation
//!
//! These types enforce validity at construction time. Names are capped at
//! [`MAX_NAME_BYTES`] bytes and may not contain NUL bytes. Empty names are
//! valid: an anonymous customer or an unlabeled item is still a customer
//! or an item.
//!
//! # Ordering
//!
//! Item names compare by exact byte sequence, so ordering is
//! case-sensitive: every uppercase ASCII letter sorts before every
//! lowercase one.
//!
//! # Examples
//!
//! ```
//! use lanework::core::types::{CustomerName, ItemName};
//!
//! // Valid constructions
//! let item = ItemName::new("AppLe").unwrap();
//! let customer = CustomerName::new("Helen").unwrap();
//! let anonymous = CustomerName::new("").unwrap();
//!
//! // Byte-wise ordering: uppercase sorts before lowercase
//! assert!(ItemName::new("CheRRy").unwrap() < ItemName::new("bAnAnA").unwrap());
//!
//! // Invalid constructions fail at creation time
//! assert!(ItemName::new("bad\0name").is_err());
//! assert!(ItemName::new("x".repeat(2000)).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of an item or customer name, in bytes.
pub const MAX_NAME_BYTES: usize = 1023;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid item name: {0}")]
    InvalidItemName(String),

    #[error("invalid customer name: {0}")]
    InvalidCustomerName(String),
}

/// Validate a name against the shared naming rules.
fn validate_name(name: &str) -> Result<(), String> {
    if name.len() > MAX_NAME_BYTES {
        return Err(format!(
            "name exceeds {} bytes (got {})",
            MAX_NAME_BYTES,
            name.len()
        ));
    }
    if name.contains('\0') {
        return Err("name cannot contain NUL bytes".into());
    }
    Ok(())
}

/// A validated item name.
///
/// Item names order carts: entries are kept strictly ascending by
/// byte-wise comparison of their names, which the derived `Ord` on the
/// underlying `String` provides.
///
/// # Example
///
/// ```
/// use lanework::core::types::ItemName;
///
/// let name = ItemName::new("Pikachu Plushie").unwrap();
/// assert_eq!(name.as_str(), "Pikachu Plushie");
///
/// // The empty name is valid
/// assert!(ItemName::new("").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a new validated item name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidItemName` if the name exceeds
    /// [`MAX_NAME_BYTES`] or contains a NUL byte.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        validate_name(&name).map_err(TypeError::InvalidItemName)?;
        Ok(Self(name))
    }

    /// Get the item name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> Self {
        name.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated customer name.
///
/// Customer names identify customers for display and scenario scripting.
/// They are not required to be unique: two customers may share a name and
/// remain distinct customers.
///
/// # Example
///
/// ```
/// use lanework::core::types::CustomerName;
///
/// let name = CustomerName::new("Robert Jr.").unwrap();
/// assert_eq!(name.as_str(), "Robert Jr.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerName(String);

impl CustomerName {
    /// Create a new validated customer name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidCustomerName` if the name exceeds
    /// [`MAX_NAME_BYTES`] or contains a NUL byte.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        validate_name(&name).map_err(TypeError::InvalidCustomerName)?;
        Ok(Self(name))
    }

    /// Get the customer name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CustomerName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CustomerName> for String {
    fn from(name: CustomerName) -> Self {
        name.0
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A UTC timestamp in RFC3339 format.
///
/// # Example
///
/// ```
/// use lanework::core::types::UtcTimestamp;
///
/// let now = UtcTimestamp::now();
/// println!("Current time: {}", now);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcTimestamp(chrono::DateTime<chrono::Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }

    /// Create a timestamp from a chrono DateTime.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self(dt)
    }

    /// Get the underlying datetime.
    pub fn as_datetime(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
