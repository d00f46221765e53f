//! Flattened export records
//!
//! These are the denormalized output units consumed by the external
//! analytics service. Field names and value shapes are part of the feed
//! contract; change them only with the consumer.

use serde::{Deserialize, Serialize};

/// Stock availability for the product feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Purchasable right now (includes backordered items)
    InStock,
    /// Not purchasable
    OutOfStock,
}

/// Flattened product export record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// SKU, falling back to the stringified entity identity
    pub sku: String,

    /// Display name; variants are composed "<parent> - <own>"
    pub name: String,

    /// Stock quantity; 999 means unmanaged/always available
    pub quantity: i64,

    /// Unit price
    pub price: f64,

    /// Store currency code
    pub currency: String,

    /// in_stock / out_of_stock
    pub availability: Availability,

    /// Cleaned plain-text description, possibly empty
    pub description: String,

    /// Brand/manufacturer name, possibly empty
    pub manufacturer: String,

    /// Absolute image URL, possibly empty
    pub image: String,

    /// Canonical product URL
    pub url: String,

    /// Root-to-leaf category path joined with " > ", possibly empty
    pub category: String,
}

/// Flattened order export record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order identity
    pub order_id: i64,

    /// Pseudonymized customer identity (one-way digest of the contact
    /// identifier; the raw identifier never appears in output)
    pub customer_id: String,

    /// Order grand total
    pub total: f64,

    /// Currency code
    pub currency: String,

    /// Creation timestamp, "YYYY-MM-DD HH:MM:SS"
    pub date: String,

    /// Line items in stored order
    pub products: Vec<OrderLineRecord>,
}

/// One exported order line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineRecord {
    /// Resolved SKU, falling back to the stored product identity
    pub sku: String,

    /// Line display name
    pub name: String,

    /// Ordered quantity
    pub quantity: u32,

    /// Unit price including tax
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Availability::InStock).unwrap(),
            "\"in_stock\""
        );
        assert_eq!(
            serde_json::to_string(&Availability::OutOfStock).unwrap(),
            "\"out_of_stock\""
        );
    }

    #[test]
    fn test_product_record_field_names() {
        let record = ProductRecord {
            sku: "TEE-1".to_string(),
            name: "Plain Tee".to_string(),
            quantity: 3,
            price: 19.99,
            currency: "USD".to_string(),
            availability: Availability::InStock,
            description: "Soft cotton".to_string(),
            manufacturer: "Acme".to_string(),
            image: "https://shop.example.com/media/tee.jpg".to_string(),
            url: "https://shop.example.com/product/1".to_string(),
            category: "Apparel > Tees".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        for field in [
            "sku",
            "name",
            "quantity",
            "price",
            "currency",
            "availability",
            "description",
            "manufacturer",
            "image",
            "url",
            "category",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(json["availability"], "in_stock");
    }

    #[test]
    fn test_order_record_field_names() {
        let record = OrderRecord {
            order_id: 55,
            customer_id: "ab".repeat(32),
            total: 49.5,
            currency: "EUR".to_string(),
            date: "2025-03-01 12:30:00".to_string(),
            products: vec![OrderLineRecord {
                sku: "TEE-1".to_string(),
                name: "Plain Tee".to_string(),
                quantity: 2,
                price: 24.75,
            }],
        };

        let json = serde_json::to_value(&record).unwrap();
        for field in ["order_id", "customer_id", "total", "currency", "date", "products"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(json["products"][0]["sku"], "TEE-1");
    }
}
