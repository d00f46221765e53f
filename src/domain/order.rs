//! Order domain model
//!
//! Orders are read-only snapshots loaded one at a time by identity. The
//! contact email is carried here only so the exporter can derive the
//! pseudonymized customer identity; it never reaches an export record.

use crate::domain::ids::{EntityId, OrderId};
use chrono::{DateTime, Utc};

/// An order as loaded from the store
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Order identity
    pub id: OrderId,

    /// Store status slug (e.g. "completed", "processing")
    pub status: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Billing contact identifier; hashed before export, never emitted raw
    pub contact_email: String,

    /// Grand total
    pub total: f64,

    /// Currency code
    pub currency: String,

    /// Line items in stored order
    pub lines: Vec<OrderLine>,
}

/// One order line item
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// Referenced product; the product may no longer exist
    pub product_id: EntityId,

    /// Line display name as captured at purchase time
    pub name: String,

    /// Ordered quantity
    pub quantity: u32,

    /// Line total excluding tax
    pub total: f64,

    /// Line tax total
    pub tax_total: f64,
}

impl OrderLine {
    /// Unit price: (total + tax) / quantity, zero quantity yields zero
    pub fn unit_price(&self) -> f64 {
        if self.quantity == 0 {
            return 0.0;
        }
        (self.total + self.tax_total) / f64::from(self.quantity)
    }
}
