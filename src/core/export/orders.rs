//! Order export
//!
//! Selects qualifying orders within a trailing calendar-month window and a
//! status allow-list, then flattens each into an export record. Identities
//! are processed in fixed-size chunks to bound peak memory; chunking has no
//! effect on output.

use crate::adapters::store::traits::OrderSource;
use crate::core::identity::contact_digest;
use crate::domain::attributes::AttributeMap;
use crate::domain::ids::EntityId;
use crate::domain::order::Order;
use crate::domain::records::{OrderLineRecord, OrderRecord};
use crate::domain::result::Result;
use crate::domain::MercatorError;
use chrono::{DateTime, Months, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

/// Identity chunk size; bounds peak memory, not output semantics
pub const ORDER_CHUNK_SIZE: usize = 250;

/// Status allow-list applied when configuration leaves it empty
pub const DEFAULT_ORDER_STATUSES: &[&str] = &["completed", "processing", "on-hold"];

/// Order exporter
pub struct OrderExporter {
    source: Arc<dyn OrderSource>,
    statuses: Vec<String>,
}

impl OrderExporter {
    /// Creates an order exporter
    ///
    /// `configured_statuses` is the allow-list from configuration; when
    /// empty the built-in default set applies.
    pub fn new(source: Arc<dyn OrderSource>, configured_statuses: &[String]) -> Self {
        let statuses = if configured_statuses.is_empty() {
            DEFAULT_ORDER_STATUSES.iter().map(|s| s.to_string()).collect()
        } else {
            configured_statuses.to_vec()
        };
        Self { source, statuses }
    }

    /// Exports qualifying orders of the trailing window as flattened records
    ///
    /// Output preserves retrieval order. An order that vanished since the
    /// identity scan is skipped with a warning; a store failure aborts the
    /// whole export.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero window and a store error when
    /// any query fails.
    pub async fn export_orders(&self, window_months: u32) -> Result<Vec<OrderRecord>> {
        if window_months == 0 {
            return Err(MercatorError::Validation(
                "Order export window must be at least one month".to_string(),
            ));
        }

        let started = Instant::now();
        let cutoff = order_cutoff(Utc::now(), window_months)?;

        let ids = self.source.find_order_ids(&self.statuses, cutoff).await?;

        tracing::info!(
            candidates = ids.len(),
            window_months,
            cutoff = %cutoff,
            "Order export scan complete"
        );

        let mut records = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(ORDER_CHUNK_SIZE) {
            let mut orders = Vec::with_capacity(chunk.len());
            for id in chunk {
                match self.source.load_order(*id).await? {
                    Some(order) => orders.push(order),
                    None => {
                        tracing::warn!(order_id = %id, "Order vanished during export, skipping");
                    }
                }
            }

            // One SKU lookup per chunk covers every line item's product
            // reference; missing products fall back to the stored identity
            let product_ids: Vec<EntityId> = orders
                .iter()
                .flat_map(|order| order.lines.iter().map(|line| line.product_id))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            let skus = self.source.load_sku_attributes(&product_ids).await?;

            for order in orders {
                records.push(assemble(order, &skus));
            }
        }

        tracing::info!(
            records = records.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Order export assembled"
        );

        Ok(records)
    }
}

/// Cutoff timestamp: now minus the window in calendar months
fn order_cutoff(now: DateTime<Utc>, window_months: u32) -> Result<DateTime<Utc>> {
    now.checked_sub_months(Months::new(window_months))
        .ok_or_else(|| {
            MercatorError::Validation(format!(
                "Cannot compute cutoff for a {window_months}-month window"
            ))
        })
}

fn assemble(order: Order, skus: &AttributeMap) -> OrderRecord {
    let products = order
        .lines
        .iter()
        .map(|line| {
            let sku = skus
                .get(&line.product_id)
                .and_then(|bag| bag.sku())
                .map(String::from)
                .unwrap_or_else(|| line.product_id.to_string());

            OrderLineRecord {
                sku,
                name: line.name.clone(),
                quantity: line.quantity,
                price: line.unit_price(),
            }
        })
        .collect();

    OrderRecord {
        order_id: order.id.as_i64(),
        customer_id: contact_digest(&order.contact_email),
        total: order.total,
        currency: order.currency.clone(),
        date: order.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        products,
    }
}
