//! PostgreSQL store adapter
//!
//! Implements the query-layer traits against the relational source schema.
//! All row mapping into typed domain records happens here; driver rows
//! never escape this module.

use crate::adapters::store::postgres::client::PostgresClient;
use crate::adapters::store::traits::{CatalogSource, OrderSource};
use crate::domain::attributes::{AttributeBag, AttributeMap, ATTR_SKU};
use crate::domain::catalog::{CatalogEntry, EntryKind};
use crate::domain::errors::StoreError;
use crate::domain::ids::{EntityId, OrderId, TermId};
use crate::domain::order::{Order, OrderLine};
use crate::domain::result::Result;
use crate::domain::taxonomy::TermAssignment;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tokio_postgres::Row;

const SELECT_CATALOG_ENTRIES: &str = "
    SELECT id, kind, title, description, short_description, parent_id
    FROM catalog_entries
    WHERE published AND kind IN ('base', 'variant')
    ORDER BY id";

const SELECT_ATTRIBUTES_BULK: &str = "
    SELECT entry_id, key, value
    FROM entry_attributes
    WHERE entry_id = ANY($1) AND key = ANY($2)";

const SELECT_TAXONOMY_BULK: &str = "
    SELECT et.entry_id, tt.taxonomy, tt.term_id, tt.name, tt.parent_id
    FROM entry_terms et
    INNER JOIN taxonomy_terms tt ON tt.term_id = et.term_id
    WHERE et.entry_id = ANY($1) AND tt.taxonomy = ANY($2)
    ORDER BY et.entry_id, et.position";

const SELECT_ORDER_IDS_INDEXED: &str = "
    SELECT id
    FROM orders
    WHERE status = ANY($1) AND created_at >= $2
    ORDER BY id";

const SELECT_ORDER_IDS_SCAN: &str = "
    SELECT id, status
    FROM orders
    WHERE created_at >= $1
    ORDER BY id";

const SELECT_ORDER: &str = "
    SELECT id, status, created_at, contact_email, total, currency
    FROM orders
    WHERE id = $1";

const SELECT_ORDER_LINES: &str = "
    SELECT product_id, name, quantity, total, tax_total
    FROM order_lines
    WHERE order_id = $1
    ORDER BY line_no";

/// PostgreSQL-backed catalog and order source
pub struct PostgresStore {
    client: PostgresClient,
}

impl PostgresStore {
    /// Wraps a pooled client
    pub fn new(client: PostgresClient) -> Self {
        Self { client }
    }

    /// Access to the underlying client (connection tests, schema bootstrap)
    pub fn client(&self) -> &PostgresClient {
        &self.client
    }

    fn map_entry_row(row: &Row) -> Result<CatalogEntry> {
        let id: i64 = get(row, "id")?;
        let kind_raw: String = get(row, "kind")?;
        let kind = EntryKind::parse(&kind_raw).ok_or_else(|| {
            StoreError::InvalidRow(format!("Unknown entry kind '{kind_raw}' for entry {id}"))
        })?;

        Ok(CatalogEntry {
            id: EntityId::new(id),
            kind,
            title: get(row, "title")?,
            description: get(row, "description")?,
            short_description: get(row, "short_description")?,
            parent_id: get::<Option<i64>>(row, "parent_id")?.map(EntityId::new),
        })
    }

    fn map_order_row(row: &Row, lines: Vec<OrderLine>) -> Result<Order> {
        Ok(Order {
            id: OrderId::new(get(row, "id")?),
            status: get(row, "status")?,
            created_at: get(row, "created_at")?,
            contact_email: get(row, "contact_email")?,
            total: get(row, "total")?,
            currency: get(row, "currency")?,
            lines,
        })
    }

    fn map_line_row(row: &Row) -> Result<OrderLine> {
        let quantity: i32 = get(row, "quantity")?;
        Ok(OrderLine {
            product_id: EntityId::new(get(row, "product_id")?),
            name: get(row, "name")?,
            quantity: quantity.max(0) as u32,
            total: get(row, "total")?,
            tax_total: get(row, "tax_total")?,
        })
    }
}

/// Typed column access with adapter-local error mapping
fn get<'a, T>(row: &'a Row, column: &str) -> Result<T>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    Ok(row
        .try_get(column)
        .map_err(|e| StoreError::InvalidRow(format!("column '{column}': {e}")))?)
}

#[async_trait]
impl CatalogSource for PostgresStore {
    async fn load_catalog_entries(&self) -> Result<Vec<CatalogEntry>> {
        let rows = self.client.query(SELECT_CATALOG_ENTRIES, &[]).await?;

        tracing::debug!(count = rows.len(), "Loaded catalog entries");

        rows.iter().map(Self::map_entry_row).collect()
    }

    async fn load_attributes_bulk(
        &self,
        ids: &[EntityId],
        keys: &[&str],
    ) -> Result<AttributeMap> {
        if ids.is_empty() || keys.is_empty() {
            return Ok(AttributeMap::new());
        }

        let id_params: Vec<i64> = ids.iter().map(EntityId::as_i64).collect();
        let key_params: Vec<String> = keys.iter().map(|k| k.to_string()).collect();

        let rows = self
            .client
            .query(SELECT_ATTRIBUTES_BULK, &[&id_params, &key_params])
            .await?;

        let mut map = AttributeMap::new();
        for row in &rows {
            let entry_id: i64 = get(row, "entry_id")?;
            let key: String = get(row, "key")?;
            let value: String = get(row, "value")?;
            map.entry(EntityId::new(entry_id))
                .or_insert_with(AttributeBag::new)
                .set(key, value);
        }

        tracing::debug!(entities = map.len(), rows = rows.len(), "Loaded attribute rows");
        Ok(map)
    }

    async fn load_taxonomy_bulk(
        &self,
        ids: &[EntityId],
        taxonomies: &[&str],
    ) -> Result<Vec<TermAssignment>> {
        if ids.is_empty() || taxonomies.is_empty() {
            return Ok(Vec::new());
        }

        let id_params: Vec<i64> = ids.iter().map(EntityId::as_i64).collect();
        let taxonomy_params: Vec<String> = taxonomies.iter().map(|t| t.to_string()).collect();

        let rows = self
            .client
            .query(SELECT_TAXONOMY_BULK, &[&id_params, &taxonomy_params])
            .await?;

        rows.iter()
            .map(|row| {
                Ok(TermAssignment {
                    entity_id: EntityId::new(get(row, "entry_id")?),
                    taxonomy: get(row, "taxonomy")?,
                    term_id: TermId::new(get(row, "term_id")?),
                    term_name: get(row, "name")?,
                    parent_id: get::<Option<i64>>(row, "parent_id")?.map(TermId::new),
                })
            })
            .collect()
    }
}

#[async_trait]
impl OrderSource for PostgresStore {
    async fn find_order_ids(
        &self,
        statuses: &[String],
        created_after: DateTime<Utc>,
    ) -> Result<Vec<OrderId>> {
        if self.client.order_status_index() {
            let status_params: Vec<String> = statuses.to_vec();
            let rows = self
                .client
                .query(SELECT_ORDER_IDS_INDEXED, &[&status_params, &created_after])
                .await?;

            return rows
                .iter()
                .map(|row| Ok(OrderId::new(get(row, "id")?)))
                .collect();
        }

        // Scan path for stores without the composite index: filter the
        // window client-side. Yields the same identity set as above.
        let allowed: HashSet<&str> = statuses.iter().map(String::as_str).collect();
        let rows = self
            .client
            .query(SELECT_ORDER_IDS_SCAN, &[&created_after])
            .await?;

        let mut ids = Vec::new();
        for row in &rows {
            let status: String = get(row, "status")?;
            if allowed.contains(status.as_str()) {
                ids.push(OrderId::new(get(row, "id")?));
            }
        }
        Ok(ids)
    }

    async fn load_order(&self, id: OrderId) -> Result<Option<Order>> {
        let order_rows = self.client.query(SELECT_ORDER, &[&id.as_i64()]).await?;

        let Some(order_row) = order_rows.first() else {
            return Ok(None);
        };

        let line_rows = self.client.query(SELECT_ORDER_LINES, &[&id.as_i64()]).await?;
        let lines = line_rows
            .iter()
            .map(Self::map_line_row)
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(Self::map_order_row(order_row, lines)?))
    }

    async fn load_sku_attributes(&self, ids: &[EntityId]) -> Result<AttributeMap> {
        self.load_attributes_bulk(ids, &[ATTR_SKU]).await
    }
}
