//! Result type alias for Mercator

use super::errors::MercatorError;

/// Result type alias for Mercator operations
///
/// This is a convenience type alias that uses `MercatorError` as the error
/// type. Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use mercator::domain::result::Result;
/// use mercator::domain::errors::MercatorError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MercatorError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MercatorError>;
