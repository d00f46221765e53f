//! Configuration management for Mercator.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Mercator uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MERCATOR_*` environment variable overrides
//! - Default values for optional settings
//! - Comprehensive validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [store]
//! connection_string = "${MERCATOR_STORE_DSN}"
//! max_connections = 10
//!
//! [export]
//! order_window_months = 12
//! order_statuses = []   # empty -> completed, processing, on-hold
//!
//! [feed]
//! enabled = true
//! access_token = "${MERCATOR_FEED_TOKEN}"
//!
//! [storefront]
//! base_url = "https://shop.example.com"
//! currency = "USD"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mercator::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mercator.toml")?;
//! println!("Window: {} months", config.export.order_window_months);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, Environment, ExportConfig, FeedConfig, LoggingConfig, MercatorConfig,
    StoreConfig, StorefrontConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
