//! Integration tests for feed dispatch
//!
//! Gating must run before any exporter, and the envelope must match the
//! consumer contract: `{"data": [...]}` with an export filename.

use mercator::adapters::links::{Storefront, StorefrontLinks};
use mercator::adapters::store::memory::MemoryStore;
use mercator::adapters::store::traits::{CatalogSource, OrderSource};
use mercator::config::{secret_string, FeedConfig, StorefrontConfig};
use mercator::core::export::{OrderExporter, ProductExporter};
use mercator::domain::attributes::{AttributeBag, ATTR_PRICE};
use mercator::domain::catalog::CatalogEntry;
use mercator::domain::errors::{FeedError, MercatorError};
use mercator::domain::ids::EntityId;
use mercator::feed::{FeedGate, FeedKind, FeedService};
use std::sync::Arc;

fn service(enabled: bool) -> FeedService {
    let mut store = MemoryStore::new();
    store.add_entry(CatalogEntry::base(1, "Tee"));
    store.set_attributes(
        EntityId::new(1),
        AttributeBag::new().with(ATTR_PRICE, "19.99"),
    );

    let store = Arc::new(store);
    let catalog: Arc<dyn CatalogSource> = store.clone();
    let orders: Arc<dyn OrderSource> = store;
    let storefront: Arc<dyn Storefront> = Arc::new(
        StorefrontLinks::new(&StorefrontConfig {
            base_url: "https://shop.example.com".to_string(),
            media_base_url: None,
            currency: "USD".to_string(),
        })
        .unwrap(),
    );

    let gate = FeedGate::from_config(&FeedConfig {
        enabled,
        access_token: Some(secret_string("feed-token".to_string())),
    });

    FeedService::new(
        gate,
        OrderExporter::new(orders, &[]),
        ProductExporter::new(catalog, storefront),
        12,
    )
}

#[tokio::test]
async fn disabled_feed_rejects_before_export() {
    let result = service(false).handle(FeedKind::Products, "feed-token").await;
    assert!(matches!(
        result,
        Err(MercatorError::Feed(FeedError::Disabled))
    ));
}

#[tokio::test]
async fn invalid_token_is_rejected() {
    let result = service(true).handle(FeedKind::Products, "wrong-token").await;
    assert!(matches!(
        result,
        Err(MercatorError::Feed(FeedError::AccessDenied))
    ));
}

#[tokio::test]
async fn product_feed_wraps_records_in_data_envelope() {
    let document = service(true)
        .handle(FeedKind::Products, "feed-token")
        .await
        .unwrap();

    assert!(document.filename.starts_with("export_products_"));
    assert!(document.filename.ends_with(".json"));

    let parsed: serde_json::Value = serde_json::from_str(&document.body).unwrap();
    let data = parsed["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["sku"], "1");
    assert_eq!(data[0]["availability"], "in_stock");
}

#[tokio::test]
async fn order_feed_is_selected_by_kind_parameter() {
    let document = service(true)
        .handle(FeedKind::from_param("orders"), "feed-token")
        .await
        .unwrap();

    assert!(document.filename.starts_with("export_orders_"));

    let parsed: serde_json::Value = serde_json::from_str(&document.body).unwrap();
    assert!(parsed["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_kind_parameter_defaults_to_products() {
    let document = service(true)
        .handle(FeedKind::from_param("everything"), "feed-token")
        .await
        .unwrap();

    assert!(document.filename.starts_with("export_products_"));
}
