//! Storefront link resolution
//!
//! Resolves thumbnail references to absolute image URLs, entity identities
//! to canonical product URLs, and exposes the store currency. Resolution is
//! configuration-driven; a reference that cannot be resolved yields an
//! empty string rather than an error.

use crate::config::StorefrontConfig;
use crate::domain::ids::EntityId;
use crate::domain::result::Result;
use crate::domain::MercatorError;
use url::Url;

/// Link resolution services consumed by the product export
pub trait Storefront: Send + Sync {
    /// Absolute image URL for a thumbnail reference; empty when the
    /// reference cannot be resolved
    fn resolve_image_url(&self, thumbnail_ref: &str) -> String;

    /// Canonical product URL for a catalog entity
    fn resolve_canonical_url(&self, id: EntityId) -> String;

    /// Store currency code
    fn currency(&self) -> &str;
}

/// Configuration-backed [`Storefront`] implementation
#[derive(Debug, Clone)]
pub struct StorefrontLinks {
    base_url: Url,
    media_base_url: Url,
    currency: String,
}

impl StorefrontLinks {
    /// Builds the resolver from validated storefront configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the base URLs do not parse.
    pub fn new(config: &StorefrontConfig) -> Result<Self> {
        let base_url = parse_dir_url(&config.base_url)?;
        let media_base_url = match &config.media_base_url {
            Some(media) => parse_dir_url(media)?,
            None => base_url.join("media/").map_err(|e| {
                MercatorError::Configuration(format!("Invalid media base URL: {e}"))
            })?,
        };

        Ok(Self {
            base_url,
            media_base_url,
            currency: config.currency.clone(),
        })
    }
}

impl Storefront for StorefrontLinks {
    fn resolve_image_url(&self, thumbnail_ref: &str) -> String {
        let thumbnail_ref = thumbnail_ref.trim();
        if thumbnail_ref.is_empty() {
            return String::new();
        }

        // Already absolute references pass through untouched
        if Url::parse(thumbnail_ref).is_ok() {
            return thumbnail_ref.to_string();
        }

        self.media_base_url
            .join(thumbnail_ref.trim_start_matches('/'))
            .map(String::from)
            .unwrap_or_default()
    }

    fn resolve_canonical_url(&self, id: EntityId) -> String {
        self.base_url
            .join(&format!("product/{id}"))
            .map(String::from)
            .unwrap_or_default()
    }

    fn currency(&self) -> &str {
        &self.currency
    }
}

/// Parses a base URL, normalizing it to end with a slash so joins append
/// instead of replacing the last path segment
fn parse_dir_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized)
        .map_err(|e| MercatorError::Configuration(format!("Invalid storefront URL '{raw}': {e}")))
}
