//! In-memory store implementation
//!
//! Implements the query-layer traits over plain collections. Used by the
//! test suites and for offline experiments; behavior mirrors the
//! PostgreSQL adapter, including retrieval order and the unset-vs-empty
//! attribute distinction.

use crate::adapters::store::traits::{CatalogSource, OrderSource};
use crate::domain::attributes::{AttributeBag, AttributeMap, ATTR_SKU};
use crate::domain::catalog::CatalogEntry;
use crate::domain::ids::{EntityId, OrderId};
use crate::domain::order::Order;
use crate::domain::result::Result;
use crate::domain::taxonomy::TermAssignment;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// In-memory catalog and order source
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<CatalogEntry>,
    unpublished: HashSet<EntityId>,
    attributes: HashMap<EntityId, AttributeBag>,
    assignments: Vec<TermAssignment>,
    orders: Vec<Order>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a publishable catalog entry; insertion order is retrieval order
    pub fn add_entry(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    /// Adds an entry that is not publishable and must never be exported
    pub fn add_unpublished_entry(&mut self, entry: CatalogEntry) {
        self.unpublished.insert(entry.id);
        self.entries.push(entry);
    }

    /// Sets the attribute bag for an entity
    pub fn set_attributes(&mut self, id: EntityId, bag: AttributeBag) {
        self.attributes.insert(id, bag);
    }

    /// Adds a taxonomy term assignment; per-entity order is preserved
    pub fn add_assignment(&mut self, assignment: TermAssignment) {
        self.assignments.push(assignment);
    }

    /// Adds an order; insertion order is retrieval order
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }
}

#[async_trait]
impl CatalogSource for MemoryStore {
    async fn load_catalog_entries(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| !self.unpublished.contains(&entry.id))
            .cloned()
            .collect())
    }

    async fn load_attributes_bulk(
        &self,
        ids: &[EntityId],
        keys: &[&str],
    ) -> Result<AttributeMap> {
        let wanted: HashSet<&EntityId> = ids.iter().collect();
        let mut map = AttributeMap::new();

        for (id, bag) in &self.attributes {
            if !wanted.contains(id) {
                continue;
            }
            let mut filtered = AttributeBag::new();
            for key in keys {
                if let Some(value) = bag.get(key) {
                    filtered.set(*key, value);
                }
            }
            if keys.iter().any(|key| bag.contains(key)) {
                map.insert(*id, filtered);
            }
        }

        Ok(map)
    }

    async fn load_taxonomy_bulk(
        &self,
        ids: &[EntityId],
        taxonomies: &[&str],
    ) -> Result<Vec<TermAssignment>> {
        let wanted: HashSet<&EntityId> = ids.iter().collect();
        Ok(self
            .assignments
            .iter()
            .filter(|a| wanted.contains(&a.entity_id) && taxonomies.contains(&a.taxonomy.as_str()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OrderSource for MemoryStore {
    async fn find_order_ids(
        &self,
        statuses: &[String],
        created_after: DateTime<Utc>,
    ) -> Result<Vec<OrderId>> {
        Ok(self
            .orders
            .iter()
            .filter(|order| {
                statuses.contains(&order.status) && order.created_at >= created_after
            })
            .map(|order| order.id)
            .collect())
    }

    async fn load_order(&self, id: OrderId) -> Result<Option<Order>> {
        Ok(self.orders.iter().find(|order| order.id == id).cloned())
    }

    async fn load_sku_attributes(&self, ids: &[EntityId]) -> Result<AttributeMap> {
        self.load_attributes_bulk(ids, &[ATTR_SKU]).await
    }
}
