//! Domain models and types for Mercator.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`EntityId`], [`TermId`], [`OrderId`])
//! - **Source models** ([`CatalogEntry`], [`AttributeBag`],
//!   [`TaxonomyIndex`], [`Order`])
//! - **Export records** ([`ProductRecord`], [`OrderRecord`])
//! - **Error types** ([`MercatorError`], [`StoreError`], [`FeedError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Mercator uses the newtype pattern for identifiers to prevent mixing
//! different ID types:
//!
//! ```rust
//! use mercator::domain::{EntityId, TermId};
//!
//! let entity = EntityId::new(42);
//! let term = TermId::new(42);
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: EntityId = term;  // Compile error!
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, MercatorError>`]:
//!
//! ```rust
//! use mercator::domain::{MercatorError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(MercatorError::Validation("Invalid input".to_string()))
//! }
//! ```

pub mod attributes;
pub mod catalog;
pub mod errors;
pub mod ids;
pub mod order;
pub mod records;
pub mod result;
pub mod taxonomy;

// Re-export commonly used types for convenience
pub use attributes::{AttributeBag, AttributeMap, EXPORT_ATTRIBUTE_KEYS};
pub use catalog::{CatalogEntry, EntryKind};
pub use errors::{FeedError, MercatorError, StoreError};
pub use ids::{EntityId, OrderId, TermId};
pub use order::{Order, OrderLine};
pub use records::{Availability, OrderLineRecord, OrderRecord, ProductRecord};
pub use result::Result;
pub use taxonomy::{TaxonomyIndex, TermAssignment, BRAND_TAXONOMIES, TAXONOMY_CATEGORY};
