//! Sparse per-entity attribute bag
//!
//! The source store keeps denormalized product metadata in a key/value
//! attribute table. A bag holds the rows for one entity. Absence is
//! meaningful: a key that was never set is `None`, a key set to the empty
//! string is `Some("")`.

use crate::domain::ids::EntityId;
use std::collections::HashMap;

/// Attribute key for the stock-keeping unit
pub const ATTR_SKU: &str = "sku";
/// Attribute key for the decimal price string
pub const ATTR_PRICE: &str = "price";
/// Attribute key for the managed stock quantity
pub const ATTR_STOCK: &str = "stock";
/// Attribute key for the stock status flag ("instock" / "outofstock")
pub const ATTR_STOCK_STATUS: &str = "stock_status";
/// Attribute key for the thumbnail media reference
pub const ATTR_THUMBNAIL: &str = "thumbnail";
/// Attribute key for serialized attribute metadata
pub const ATTR_META: &str = "attribute_meta";

/// The fixed allow-list of attribute keys the product export reads
pub const EXPORT_ATTRIBUTE_KEYS: &[&str] = &[
    ATTR_SKU,
    ATTR_PRICE,
    ATTR_STOCK,
    ATTR_STOCK_STATUS,
    ATTR_THUMBNAIL,
    ATTR_META,
];

/// Sparse key→value attribute mapping for one entity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeBag {
    values: HashMap<String, String>,
}

impl AttributeBag {
    /// Creates an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the raw value for a key, distinguishing unset from empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the value for a key only if it is non-empty after trimming
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// True if the key was set at all, even to an empty string
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// SKU value, if non-empty
    pub fn sku(&self) -> Option<&str> {
        self.get_non_empty(ATTR_SKU)
    }

    /// Raw price string, if set (may be empty)
    pub fn price(&self) -> Option<&str> {
        self.get(ATTR_PRICE)
    }

    /// Raw managed stock quantity string, if set
    pub fn stock(&self) -> Option<&str> {
        self.get(ATTR_STOCK)
    }

    /// Stock status flag, if set
    pub fn stock_status(&self) -> Option<&str> {
        self.get(ATTR_STOCK_STATUS)
    }

    /// Thumbnail media reference, if non-empty
    pub fn thumbnail(&self) -> Option<&str> {
        self.get_non_empty(ATTR_THUMBNAIL)
    }
}

/// Bulk attribute lookup result: entity identity → attribute bag
pub type AttributeMap = HashMap<EntityId, AttributeBag>;
