//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Mercator using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Mercator - e-commerce catalog and order feed exporter
#[derive(Parser, Debug)]
#[command(name = "mercator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "mercator.toml", env = "MERCATOR_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MERCATOR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a product or order feed from the configured store
    Export(commands::export::ExportArgs),

    /// Validate the configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Write a starter configuration file with a fresh access token
    Init(commands::init::InitArgs),
}
