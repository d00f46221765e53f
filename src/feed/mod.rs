//! Feed dispatch
//!
//! The single dispatch point in front of the two exporters. A request names
//! the feed kind and presents the shared access token; gating happens here,
//! before any exporter runs, and is expressed as error values — the core
//! never terminates the process. The transport (HTTP, CLI) stays outside
//! this module; it only has to serialize a [`FeedDocument`].

use crate::config::{FeedConfig, SecretString};
use crate::core::export::{OrderExporter, ProductExporter};
use crate::domain::errors::FeedError;
use crate::domain::result::Result;
use chrono::Utc;
use secrecy::ExposeSecret;
use serde::Serialize;
use uuid::Uuid;

/// Feed kind requested by the consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    /// Product catalog feed
    Products,
    /// Order history feed
    Orders,
}

impl FeedKind {
    /// Parses the request parameter; anything but "orders" selects the
    /// product feed
    pub fn from_param(param: &str) -> Self {
        if param == "orders" {
            Self::Orders
        } else {
            Self::Products
        }
    }

    /// Feed kind slug used in filenames and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Orders => "orders",
        }
    }
}

/// Access gate for the feed endpoint
///
/// Checks the feature flag and the shared access token. Both checks run
/// before the core is ever invoked.
pub struct FeedGate {
    enabled: bool,
    access_token: Option<SecretString>,
}

impl FeedGate {
    /// Builds the gate from feed configuration
    pub fn from_config(config: &FeedConfig) -> Self {
        Self {
            enabled: config.enabled,
            access_token: config.access_token.clone(),
        }
    }

    /// Authorizes a presented token
    pub fn authorize(&self, presented: &str) -> std::result::Result<(), FeedError> {
        if !self.enabled {
            return Err(FeedError::Disabled);
        }

        match &self.access_token {
            Some(token)
                if !token.expose_secret().is_empty()
                    && token.expose_secret().as_ref() == presented =>
            {
                Ok(())
            }
            _ => Err(FeedError::AccessDenied),
        }
    }
}

/// A serialized feed ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    /// Suggested download filename, `export_<kind>_<date>.json`
    pub filename: String,

    /// Pretty-printed JSON body, `{"data": [...]}`
    pub body: String,
}

/// Wraps exported records into the feed envelope
pub fn envelope<T: Serialize>(kind: FeedKind, records: &[T]) -> Result<FeedDocument> {
    #[derive(Serialize)]
    struct Envelope<'a, T> {
        data: &'a [T],
    }

    let body = serde_json::to_string_pretty(&Envelope { data: records })?;
    let filename = format!(
        "export_{}_{}.json",
        kind.as_str(),
        Utc::now().format("%Y-%m-%d")
    );

    Ok(FeedDocument { filename, body })
}

/// Feed dispatch service
///
/// Owns the gate and both exporters; `handle` is the single entry point a
/// transport calls.
pub struct FeedService {
    gate: FeedGate,
    orders: OrderExporter,
    products: ProductExporter,
    order_window_months: u32,
}

impl FeedService {
    /// Creates the dispatch service
    pub fn new(
        gate: FeedGate,
        orders: OrderExporter,
        products: ProductExporter,
        order_window_months: u32,
    ) -> Self {
        Self {
            gate,
            orders,
            products,
            order_window_months,
        }
    }

    /// Authorizes the request, runs the selected exporter, and wraps the
    /// result into a feed document
    ///
    /// # Errors
    ///
    /// Returns the gate's `FeedError` before any export work happens, or
    /// the exporter's error afterwards.
    pub async fn handle(&self, kind: FeedKind, presented_token: &str) -> Result<FeedDocument> {
        self.gate.authorize(presented_token)?;

        let run_id = Uuid::new_v4();
        tracing::info!(run_id = %run_id, kind = kind.as_str(), "Feed request authorized");

        match kind {
            FeedKind::Orders => {
                let records = self.orders.export_orders(self.order_window_months).await?;
                envelope(kind, &records)
            }
            FeedKind::Products => {
                let records = self.products.export_products().await?;
                envelope(kind, &records)
            }
        }
    }
}
