//! Export engines
//!
//! The two exporters behind the feed dispatch point. Each is built only on
//! the query-layer traits; they do not depend on each other.

pub mod inherit;
pub mod orders;
pub mod products;

pub use orders::{OrderExporter, DEFAULT_ORDER_STATUSES, ORDER_CHUNK_SIZE};
pub use products::{ProductExporter, UNMANAGED_STOCK_QTY};
