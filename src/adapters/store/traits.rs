//! Store abstraction traits
//!
//! These traits are the query layer the exporters are built on. Adapters
//! map driver rows into typed domain records at this boundary; nothing
//! driver-shaped crosses it. A failure in any method is fatal to the
//! current export invocation.

use crate::domain::attributes::AttributeMap;
use crate::domain::catalog::CatalogEntry;
use crate::domain::ids::{EntityId, OrderId};
use crate::domain::order::Order;
use crate::domain::result::Result;
use crate::domain::taxonomy::TermAssignment;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Catalog read access for the product export
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load all publishable base and variant entries
    ///
    /// The returned order is deterministic for a fixed snapshot and defines
    /// the output order of the product export.
    async fn load_catalog_entries(&self) -> Result<Vec<CatalogEntry>>;

    /// Bulk key/value attribute lookup restricted to an allow-list of keys
    ///
    /// Entities without any matching rows are absent from the result map;
    /// a key set to the empty string is present with an empty value.
    async fn load_attributes_bulk(
        &self,
        ids: &[EntityId],
        keys: &[&str],
    ) -> Result<AttributeMap>;

    /// Bulk taxonomy membership lookup restricted to a set of taxonomies
    ///
    /// Returns flat assignment rows; per-entity assignment order is
    /// preserved.
    async fn load_taxonomy_bulk(
        &self,
        ids: &[EntityId],
        taxonomies: &[&str],
    ) -> Result<Vec<TermAssignment>>;
}

/// Order read access for the order export
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Identities of orders with status in the allow-list created at or
    /// after the cutoff
    ///
    /// Adapters may answer this through an optimized index path or an
    /// equivalent scan path; both must yield the same identity set, in a
    /// deterministic order for a fixed snapshot.
    async fn find_order_ids(
        &self,
        statuses: &[String],
        created_after: DateTime<Utc>,
    ) -> Result<Vec<OrderId>>;

    /// Load one order with its line items
    ///
    /// Returns `Ok(None)` when the order vanished since the identity scan;
    /// the caller skips it.
    async fn load_order(&self, id: OrderId) -> Result<Option<Order>>;

    /// Bulk SKU lookup for the product references of a chunk of orders
    ///
    /// Products that no longer exist are simply absent from the result.
    async fn load_sku_attributes(&self, ids: &[EntityId]) -> Result<AttributeMap>;
}
