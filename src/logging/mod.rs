//! Logging and observability
//!
//! Structured logging with configurable levels, console output, and
//! optional JSON file logging with rotation.
//!
//! # Example
//!
//! ```no_run
//! use mercator::logging::init_logging;
//! use mercator::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a feed export run
#[macro_export]
macro_rules! log_export_start {
    ($kind:expr, $run_id:expr) => {
        tracing::info!(
            kind = %$kind,
            run_id = %$run_id,
            "Starting export"
        );
    };
}

/// Log the completion of a feed export run
#[macro_export]
macro_rules! log_export_complete {
    ($kind:expr, $count:expr, $duration:expr) => {
        tracing::info!(
            kind = %$kind,
            records = $count,
            duration_ms = $duration.as_millis() as u64,
            "Export completed"
        );
    };
}
