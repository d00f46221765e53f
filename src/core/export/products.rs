//! Product export
//!
//! Flattens the publishable catalog into denormalized product records in
//! four bulk phases: load entries, load attributes, load taxonomy
//! memberships, assemble. Per-entity queries are never issued; everything
//! is fetched up front and indexed by identity.

use crate::adapters::links::Storefront;
use crate::adapters::store::traits::CatalogSource;
use crate::core::export::inherit::first_non_empty;
use crate::core::transform::hierarchy::category_path;
use crate::core::transform::text::clean_html;
use crate::domain::attributes::{AttributeBag, ATTR_PRICE, EXPORT_ATTRIBUTE_KEYS};
use crate::domain::catalog::{CatalogEntry, EntryKind};
use crate::domain::ids::EntityId;
use crate::domain::records::{Availability, ProductRecord};
use crate::domain::result::Result;
use crate::domain::taxonomy::{TaxonomyIndex, EXPORT_TAXONOMIES, TAXONOMY_CATEGORY};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Stock quantity reported for unmanaged stock that is in stock
///
/// Signals "always available" to the consumer; the store simply does not
/// track a quantity for these entries.
pub const UNMANAGED_STOCK_QTY: i64 = 999;

/// Product exporter
///
/// Deterministic for a fixed store snapshot: output order equals the
/// catalog load order and every included entity appears exactly once.
pub struct ProductExporter {
    catalog: Arc<dyn CatalogSource>,
    storefront: Arc<dyn Storefront>,
}

impl ProductExporter {
    /// Creates a product exporter over a catalog source and link resolver
    pub fn new(catalog: Arc<dyn CatalogSource>, storefront: Arc<dyn Storefront>) -> Self {
        Self { catalog, storefront }
    }

    /// Exports all publishable catalog entries as flattened records
    ///
    /// # Errors
    ///
    /// A store failure in any bulk phase aborts the export; no partial
    /// output is returned.
    pub async fn export_products(&self) -> Result<Vec<ProductRecord>> {
        let started = Instant::now();

        // Phase 1: all publishable base and variant entries
        let entries = self.catalog.load_catalog_entries().await?;
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<EntityId> = entries.iter().map(|e| e.id).collect();
        let by_id: HashMap<EntityId, &CatalogEntry> =
            entries.iter().map(|e| (e.id, e)).collect();

        // Phase 2: one bulk attribute fetch across the full identity set
        let attributes = self
            .catalog
            .load_attributes_bulk(&ids, EXPORT_ATTRIBUTE_KEYS)
            .await?;

        // Phase 3: one bulk taxonomy fetch, folded into the three lookups
        let assignments = self.catalog.load_taxonomy_bulk(&ids, EXPORT_TAXONOMIES).await?;
        let taxonomy = TaxonomyIndex::from_assignments(assignments);

        // Phase 4: assemble in load order
        let empty_bag = AttributeBag::new();
        let mut records = Vec::with_capacity(entries.len());
        for entry in &entries {
            let bag = attributes.get(&entry.id).unwrap_or(&empty_bag);
            let parent = entry
                .parent_id
                .and_then(|parent_id| by_id.get(&parent_id).copied());
            let parent_bag = entry.parent_id.and_then(|parent_id| attributes.get(&parent_id));

            if let Some(record) = self.assemble(entry, parent, bag, parent_bag, &taxonomy) {
                records.push(record);
            }
        }

        tracing::info!(
            entries = entries.len(),
            records = records.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Product export assembled"
        );

        Ok(records)
    }

    fn assemble(
        &self,
        entry: &CatalogEntry,
        parent: Option<&CatalogEntry>,
        bag: &AttributeBag,
        parent_bag: Option<&AttributeBag>,
        taxonomy: &TaxonomyIndex,
    ) -> Option<ProductRecord> {
        // Eligibility: a base entry without a price is treated as a
        // non-buyable container (its variants carry the prices). The
        // heuristic comes from the source store's conventions; variants
        // are always considered.
        let price_raw = bag.get_non_empty(ATTR_PRICE);
        if entry.kind == EntryKind::Base && price_raw.is_none() {
            return None;
        }
        let price = price_raw
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|p| p.is_finite() && *p >= 0.0)
            .unwrap_or(0.0);

        let sku = bag
            .sku()
            .map(String::from)
            .unwrap_or_else(|| entry.id.to_string());

        let (quantity, availability) = resolve_stock(bag);

        // Variant fields inherit from the parent when the variant's own
        // value is absent
        let parent_for_inherit = parent.filter(|_| entry.is_variant());
        let raw_description = first_non_empty([
            Some(entry.description.as_str()),
            Some(entry.short_description.as_str()),
            parent_for_inherit.map(|p| p.description.as_str()),
            parent_for_inherit.map(|p| p.short_description.as_str()),
        ])
        .unwrap_or("");
        let description = clean_html(raw_description);

        let image = first_non_empty([
            bag.thumbnail(),
            parent_bag
                .filter(|_| entry.is_variant())
                .and_then(|b| b.thumbnail()),
        ])
        .map(|thumbnail| self.storefront.resolve_image_url(thumbnail))
        .unwrap_or_default();

        let manufacturer = first_non_empty([
            taxonomy.brand_of(entry.id),
            entry.parent_id.and_then(|parent_id| taxonomy.brand_of(parent_id)),
        ])
        .unwrap_or("")
        .to_string();

        // Variants inherit the parent's category membership
        let category_target = if entry.is_variant() {
            entry.parent_id
        } else {
            Some(entry.id)
        };
        let category = category_target
            .and_then(|target| taxonomy.first_term_of(target, TAXONOMY_CATEGORY))
            .map(|leaf| category_path(taxonomy, leaf))
            .unwrap_or_default();

        let name = match parent_for_inherit {
            Some(p) => format!("{} - {}", p.title, entry.title),
            None => entry.title.clone(),
        };

        Some(ProductRecord {
            sku,
            name,
            quantity,
            price,
            currency: self.storefront.currency().to_string(),
            availability,
            description,
            manufacturer,
            image,
            url: self.storefront.resolve_canonical_url(entry.id),
            category,
        })
    }
}

/// Resolves quantity and availability from the stock attributes
///
/// A missing stock-status attribute counts as "instock". Managed stock is
/// passed through as-is, including non-positive quantities under backorder
/// policies. Unmanaged in-stock entries report the 999 sentinel.
fn resolve_stock(bag: &AttributeBag) -> (i64, Availability) {
    let stock_attr = bag.stock();
    let status = bag.stock_status().unwrap_or("instock");
    let availability = if status == "instock" {
        Availability::InStock
    } else {
        Availability::OutOfStock
    };

    let quantity = match stock_attr {
        Some(raw) => parse_quantity(raw),
        None if status == "instock" => UNMANAGED_STOCK_QTY,
        None => 0,
    };

    (quantity, availability)
}

fn parse_quantity(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().map(|q| q.trunc() as i64))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attributes::{ATTR_STOCK, ATTR_STOCK_STATUS};

    #[test]
    fn test_resolve_stock_managed() {
        let bag = AttributeBag::new()
            .with(ATTR_STOCK, "7")
            .with(ATTR_STOCK_STATUS, "instock");
        assert_eq!(resolve_stock(&bag), (7, Availability::InStock));
    }

    #[test]
    fn test_resolve_stock_backorder_stays_in_stock() {
        let bag = AttributeBag::new()
            .with(ATTR_STOCK, "-2")
            .with(ATTR_STOCK_STATUS, "instock");
        assert_eq!(resolve_stock(&bag), (-2, Availability::InStock));
    }

    #[test]
    fn test_resolve_stock_unmanaged_in_stock() {
        let bag = AttributeBag::new().with(ATTR_STOCK_STATUS, "instock");
        assert_eq!(resolve_stock(&bag), (UNMANAGED_STOCK_QTY, Availability::InStock));
    }

    #[test]
    fn test_resolve_stock_missing_status_defaults_instock() {
        let bag = AttributeBag::new();
        assert_eq!(resolve_stock(&bag), (UNMANAGED_STOCK_QTY, Availability::InStock));
    }

    #[test]
    fn test_resolve_stock_out_of_stock() {
        let bag = AttributeBag::new().with(ATTR_STOCK_STATUS, "outofstock");
        assert_eq!(resolve_stock(&bag), (0, Availability::OutOfStock));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("4"), 4);
        assert_eq!(parse_quantity("4.9"), 4);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("many"), 0);
    }
}
