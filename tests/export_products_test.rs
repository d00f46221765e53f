//! Integration tests for the product export
//!
//! Runs the exporter against the in-memory store and checks the assembled
//! records, including eligibility, inheritance, category paths, and
//! determinism.

use mercator::adapters::links::{Storefront, StorefrontLinks};
use mercator::adapters::store::memory::MemoryStore;
use mercator::adapters::store::traits::CatalogSource;
use mercator::config::StorefrontConfig;
use mercator::core::export::{ProductExporter, UNMANAGED_STOCK_QTY};
use mercator::domain::attributes::{
    AttributeBag, ATTR_PRICE, ATTR_SKU, ATTR_STOCK, ATTR_STOCK_STATUS, ATTR_THUMBNAIL,
};
use mercator::domain::catalog::CatalogEntry;
use mercator::domain::ids::{EntityId, TermId};
use mercator::domain::records::Availability;
use mercator::domain::taxonomy::{TermAssignment, TAXONOMY_CATEGORY};
use std::sync::Arc;

fn storefront() -> Arc<dyn Storefront> {
    Arc::new(
        StorefrontLinks::new(&StorefrontConfig {
            base_url: "https://shop.example.com".to_string(),
            media_base_url: None,
            currency: "USD".to_string(),
        })
        .unwrap(),
    )
}

fn exporter(store: MemoryStore) -> ProductExporter {
    let catalog: Arc<dyn CatalogSource> = Arc::new(store);
    ProductExporter::new(catalog, storefront())
}

fn assignment(
    entity: i64,
    taxonomy: &str,
    term: i64,
    name: &str,
    parent: Option<i64>,
) -> TermAssignment {
    TermAssignment {
        entity_id: EntityId::new(entity),
        taxonomy: taxonomy.to_string(),
        term_id: TermId::new(term),
        term_name: name.to_string(),
        parent_id: parent.map(TermId::new),
    }
}

#[tokio::test]
async fn base_without_price_is_excluded_variants_always_included() {
    let mut store = MemoryStore::new();

    // A container parent with no price, its variant, and a priced simple
    store.add_entry(CatalogEntry::base(1, "Tee (container)"));
    store.add_entry(CatalogEntry::variant(11, 1, "Red"));
    store.add_entry(CatalogEntry::base(2, "Mug"));
    store.set_attributes(
        EntityId::new(2),
        AttributeBag::new().with(ATTR_PRICE, "9.50"),
    );

    let records = exporter(store).export_products().await.unwrap();

    let skus: Vec<&str> = records.iter().map(|r| r.sku.as_str()).collect();
    assert_eq!(skus, vec!["11", "2"]);

    // The variant has no price anywhere: it still exports with price 0
    assert_eq!(records[0].price, 0.0);
    assert_eq!(records[1].price, 9.5);
}

#[tokio::test]
async fn base_with_empty_price_attribute_is_excluded() {
    let mut store = MemoryStore::new();
    store.add_entry(CatalogEntry::base(1, "Drafty"));
    store.set_attributes(EntityId::new(1), AttributeBag::new().with(ATTR_PRICE, ""));

    let records = exporter(store).export_products().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn variant_inherits_description_image_and_brand_from_parent() {
    let mut store = MemoryStore::new();
    store.add_entry(
        CatalogEntry::base(1, "Tee").with_description("<p>Parent &amp; description</p>"),
    );
    store.add_entry(CatalogEntry::variant(11, 1, "Red"));
    store.set_attributes(
        EntityId::new(1),
        AttributeBag::new().with(ATTR_THUMBNAIL, "tees/parent.jpg"),
    );
    store.set_attributes(
        EntityId::new(11),
        AttributeBag::new().with(ATTR_PRICE, "19.99"),
    );
    store.add_assignment(assignment(1, "brand", 30, "Acme", None));

    let records = exporter(store).export_products().await.unwrap();

    let variant = records.iter().find(|r| r.sku == "11").unwrap();
    assert_eq!(variant.description, "Parent & description");
    assert_eq!(variant.image, "https://shop.example.com/media/tees/parent.jpg");
    assert_eq!(variant.manufacturer, "Acme");
    assert_eq!(variant.name, "Tee - Red");
}

#[tokio::test]
async fn variant_own_values_beat_parent_values() {
    let mut store = MemoryStore::new();
    store.add_entry(CatalogEntry::base(1, "Tee").with_description("parent text"));
    store.add_entry(
        CatalogEntry::variant(11, 1, "Red").with_short_description("own short text"),
    );
    store.set_attributes(
        EntityId::new(1),
        AttributeBag::new().with(ATTR_THUMBNAIL, "parent.jpg"),
    );
    store.set_attributes(
        EntityId::new(11),
        AttributeBag::new()
            .with(ATTR_PRICE, "19.99")
            .with(ATTR_THUMBNAIL, "own.jpg"),
    );

    let records = exporter(store).export_products().await.unwrap();

    let variant = records.iter().find(|r| r.sku == "11").unwrap();
    assert_eq!(variant.description, "own short text");
    assert_eq!(variant.image, "https://shop.example.com/media/own.jpg");
}

#[tokio::test]
async fn variant_with_nothing_anywhere_gets_empty_fields_not_errors() {
    let mut store = MemoryStore::new();
    store.add_entry(CatalogEntry::variant(11, 99, "Orphan"));

    let records = exporter(store).export_products().await.unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.description, "");
    assert_eq!(record.image, "");
    assert_eq!(record.manufacturer, "");
    assert_eq!(record.category, "");
    assert_eq!(record.price, 0.0);
    assert_eq!(record.name, "Orphan");
}

#[tokio::test]
async fn category_path_walks_to_root_and_variant_uses_parent_membership() {
    let mut store = MemoryStore::new();
    store.add_entry(CatalogEntry::base(1, "Runner"));
    store.add_entry(CatalogEntry::variant(11, 1, "Size 42"));
    store.set_attributes(
        EntityId::new(1),
        AttributeBag::new().with(ATTR_PRICE, "89.00"),
    );
    store.set_attributes(
        EntityId::new(11),
        AttributeBag::new().with(ATTR_PRICE, "89.00"),
    );
    // A -> B -> C; the entity is assigned the leaf C
    store.add_assignment(assignment(1, TAXONOMY_CATEGORY, 3, "C", Some(2)));
    store.add_assignment(assignment(1, TAXONOMY_CATEGORY, 2, "B", Some(1)));
    store.add_assignment(assignment(1, TAXONOMY_CATEGORY, 1, "A", None));

    let records = exporter(store).export_products().await.unwrap();

    assert_eq!(records[0].category, "A > B > C");
    // The variant reports the parent's category path
    assert_eq!(records[1].category, "A > B > C");
}

#[tokio::test]
async fn category_cycle_terminates_with_truncated_path() {
    let mut store = MemoryStore::new();
    store.add_entry(CatalogEntry::base(1, "Looped"));
    store.set_attributes(
        EntityId::new(1),
        AttributeBag::new().with(ATTR_PRICE, "5.00"),
    );
    // B -> C -> B: corrupt data must not hang the export
    store.add_assignment(assignment(1, TAXONOMY_CATEGORY, 2, "B", Some(3)));
    store.add_assignment(assignment(1, TAXONOMY_CATEGORY, 3, "C", Some(2)));

    let records = exporter(store).export_products().await.unwrap();

    assert_eq!(records[0].category, "C > B");
}

#[tokio::test]
async fn unmanaged_stock_reports_sentinel_quantity() {
    let mut store = MemoryStore::new();
    store.add_entry(CatalogEntry::base(1, "Tee"));
    store.set_attributes(
        EntityId::new(1),
        AttributeBag::new()
            .with(ATTR_PRICE, "19.99")
            .with(ATTR_STOCK_STATUS, "instock"),
    );

    let records = exporter(store).export_products().await.unwrap();

    assert_eq!(records[0].quantity, UNMANAGED_STOCK_QTY);
    assert_eq!(records[0].availability, Availability::InStock);
}

#[tokio::test]
async fn managed_stock_and_status_pass_through() {
    let mut store = MemoryStore::new();
    store.add_entry(CatalogEntry::base(1, "Tee"));
    store.set_attributes(
        EntityId::new(1),
        AttributeBag::new()
            .with(ATTR_PRICE, "19.99")
            .with(ATTR_STOCK, "4")
            .with(ATTR_STOCK_STATUS, "outofstock"),
    );

    let records = exporter(store).export_products().await.unwrap();

    assert_eq!(records[0].quantity, 4);
    assert_eq!(records[0].availability, Availability::OutOfStock);
}

#[tokio::test]
async fn sku_falls_back_to_entity_identity() {
    let mut store = MemoryStore::new();
    store.add_entry(CatalogEntry::base(7, "No SKU"));
    store.add_entry(CatalogEntry::base(8, "Has SKU"));
    store.set_attributes(
        EntityId::new(7),
        AttributeBag::new().with(ATTR_PRICE, "1.00"),
    );
    store.set_attributes(
        EntityId::new(8),
        AttributeBag::new()
            .with(ATTR_PRICE, "1.00")
            .with(ATTR_SKU, "MUG-8"),
    );

    let records = exporter(store).export_products().await.unwrap();

    assert_eq!(records[0].sku, "7");
    assert_eq!(records[1].sku, "MUG-8");
}

#[tokio::test]
async fn url_and_currency_come_from_the_storefront() {
    let mut store = MemoryStore::new();
    store.add_entry(CatalogEntry::base(42, "Tee"));
    store.set_attributes(
        EntityId::new(42),
        AttributeBag::new().with(ATTR_PRICE, "19.99"),
    );

    let records = exporter(store).export_products().await.unwrap();

    assert_eq!(records[0].url, "https://shop.example.com/product/42");
    assert_eq!(records[0].currency, "USD");
}

#[tokio::test]
async fn export_is_deterministic_for_a_fixed_snapshot() {
    let mut store = MemoryStore::new();
    for id in 1..=20 {
        store.add_entry(CatalogEntry::base(id, format!("Item {id}")));
        store.set_attributes(
            EntityId::new(id),
            AttributeBag::new().with(ATTR_PRICE, format!("{id}.00")),
        );
        store.add_assignment(assignment(id, TAXONOMY_CATEGORY, 100 + id, "Stuff", None));
    }

    let catalog: Arc<dyn CatalogSource> = Arc::new(store);
    let exporter = ProductExporter::new(catalog, storefront());

    let first = exporter.export_products().await.unwrap();
    let second = exporter.export_products().await.unwrap();

    assert_eq!(first.len(), 20);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
