// Mercator - E-commerce Catalog and Order Feed Exporter
// Copyright (c) 2025 Mercator Contributors
// Licensed under the MIT License

//! # Mercator - E-commerce Feed Exporter
//!
//! Mercator extracts catalog and order data from a relational store and
//! flattens it into denormalized JSON feeds for consumption by external
//! analytics services.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** publishable catalog entries and qualifying orders in
//!   bulk queries (no N+1 per-entity lookups)
//! - **Resolving** denormalized attributes (price, stock, images, brand,
//!   category paths) from normalized relational sources
//! - **Flattening** each entity into a complete export record, applying
//!   parent-to-variant inheritance where a variant's own data is absent
//!
//! ## Architecture
//!
//! Mercator follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (exporters, transforms, pseudonymization)
//! - [`feed`] - Dispatch, gating, and feed envelope
//! - [`adapters`] - External integrations (source store, storefront links)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mercator::adapters::{PostgresClient, PostgresStore, StorefrontLinks};
//! use mercator::config::load_config;
//! use mercator::core::export::ProductExporter;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("mercator.toml")?;
//!
//!     let client = PostgresClient::new(config.store.clone())?;
//!     let store = Arc::new(PostgresStore::new(client));
//!     let storefront = Arc::new(StorefrontLinks::new(&config.storefront)?);
//!
//!     let exporter = ProductExporter::new(store, storefront);
//!     let records = exporter.export_products().await?;
//!
//!     println!("Exported {} products", records.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Mercator uses the [`domain::MercatorError`] type for all errors:
//!
//! ```rust
//! use mercator::domain::{MercatorError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(MercatorError::Validation("Invalid input".to_string()))
//! }
//! ```
//!
//! ## Logging
//!
//! Mercator uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting export");
//! warn!(order_id = 42, "Order vanished during export, skipping");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod feed;
pub mod logging;
