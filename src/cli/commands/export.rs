//! Export command implementation
//!
//! Runs the selected exporter against the configured store and writes the
//! feed document to a file or stdout.

use crate::adapters::links::StorefrontLinks;
use crate::adapters::store::postgres::{PostgresClient, PostgresStore};
use crate::config::load_config;
use crate::core::export::{OrderExporter, ProductExporter};
use crate::feed::{envelope, FeedKind};
use crate::{log_export_complete, log_export_start};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Feed kind selector for the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Product catalog feed
    Products,
    /// Order history feed
    Orders,
}

impl From<ExportKind> for FeedKind {
    fn from(kind: ExportKind) -> Self {
        match kind {
            ExportKind::Products => FeedKind::Products,
            ExportKind::Orders => FeedKind::Orders,
        }
    }
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Feed to export
    #[arg(long, value_enum, default_value_t = ExportKind::Products)]
    pub kind: ExportKind,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the configured order window (calendar months)
    #[arg(long)]
    pub window_months: Option<u32>,

    /// Create the source schema if it does not exist (development stores)
    #[arg(long)]
    pub bootstrap_schema: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut config = load_config(config_path)?;

        if let Some(window) = self.window_months {
            tracing::info!(window_months = window, "Overriding order window from CLI");
            config.export.order_window_months = window;
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let client = PostgresClient::new(config.store.clone())?;
        client.test_connection().await?;
        if self.bootstrap_schema {
            client.ensure_schema().await?;
        }

        let store = Arc::new(PostgresStore::new(client));
        let storefront = Arc::new(StorefrontLinks::new(&config.storefront)?);

        let kind = FeedKind::from(self.kind);
        let run_id = Uuid::new_v4();
        let started = Instant::now();
        log_export_start!(kind.as_str(), run_id);

        let document = match kind {
            FeedKind::Orders => {
                let exporter = OrderExporter::new(store, &config.export.order_statuses);
                let records = exporter
                    .export_orders(config.export.order_window_months)
                    .await?;
                log_export_complete!(kind.as_str(), records.len(), started.elapsed());
                envelope(kind, &records)?
            }
            FeedKind::Products => {
                let exporter = ProductExporter::new(store, storefront);
                let records = exporter.export_products().await?;
                log_export_complete!(kind.as_str(), records.len(), started.elapsed());
                envelope(kind, &records)?
            }
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, &document.body)?;
                println!("Wrote {} ({})", path.display(), document.filename);
            }
            None => {
                println!("{}", document.body);
            }
        }

        Ok(0)
    }
}
