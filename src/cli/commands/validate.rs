//! Configuration validation command

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match load_config(config_path) {
            Ok(config) => {
                println!("Configuration is valid");
                println!("  Store: pooled, max {} connections", config.store.max_connections);
                println!("  Order window: {} months", config.export.order_window_months);
                println!(
                    "  Feed: {}",
                    if config.feed.enabled { "enabled" } else { "disabled" }
                );
                Ok(0)
            }
            Err(e) => {
                eprintln!("Configuration is invalid: {e}");
                Ok(2)
            }
        }
    }
}
