//! Domain error types
//!
//! This module defines the error hierarchy for Mercator. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Mercator error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum MercatorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Source store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Feed dispatch errors
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Source-store-specific errors
///
/// Errors raised by the relational store adapters. A store failure is fatal
/// to the current export invocation; no partial output is considered valid
/// once a bulk phase fails. These errors don't expose driver types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect to the store
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// Connection pool exhausted or unavailable
    #[error("Connection pool unavailable: {0}")]
    PoolUnavailable(String),

    /// Query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A row could not be mapped into a typed record
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    /// Schema bootstrap failed
    #[error("Schema initialization failed: {0}")]
    SchemaFailed(String),

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

/// Feed dispatch errors
///
/// Returned by the dispatch collaborator before the core exporters run.
/// Gating is expressed as error values; the core never terminates the
/// process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The export feed feature flag is off
    #[error("Feed is disabled")]
    Disabled,

    /// Shared-secret check failed
    #[error("Access denied: invalid token")]
    AccessDenied,
}

// Conversion from std::io::Error
impl From<std::io::Error> for MercatorError {
    fn from(err: std::io::Error) -> Self {
        MercatorError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MercatorError {
    fn from(err: serde_json::Error) -> Self {
        MercatorError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MercatorError {
    fn from(err: toml::de::Error) -> Self {
        MercatorError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mercator_error_display() {
        let err = MercatorError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::ConnectionFailed("network unreachable".to_string());
        let err: MercatorError = store_err.into();
        assert!(matches!(err, MercatorError::Store(_)));
    }

    #[test]
    fn test_feed_error_conversion() {
        let err: MercatorError = FeedError::Disabled.into();
        assert!(matches!(err, MercatorError::Feed(FeedError::Disabled)));
        assert_eq!(err.to_string(), "Feed error: Feed is disabled");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: MercatorError = io_err.into();
        assert!(matches!(err, MercatorError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MercatorError = json_err.into();
        assert!(matches!(err, MercatorError::Serialization(_)));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = MercatorError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
        let store_err = StoreError::QueryFailed("bad query".to_string());
        let _: &dyn std::error::Error = &store_err;
    }
}
