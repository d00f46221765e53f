//! Catalog entry domain model
//!
//! A catalog entry is either a standalone base item (potentially a container
//! for variants) or a purchasable variant bound to exactly one base entry.
//! Entries are read-only snapshots fetched once per export invocation.

use crate::domain::ids::EntityId;
use serde::{Deserialize, Serialize};

/// Entry kind discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Standalone item, potentially a container for variants
    Base,
    /// Purchasable item bound to a parent base entry
    Variant,
}

impl EntryKind {
    /// Parses a kind from its store representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "base" => Some(Self::Base),
            "variant" => Some(Self::Variant),
            _ => None,
        }
    }

    /// Returns the store representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Variant => "variant",
        }
    }
}

/// A publishable catalog entry as loaded from the primary content store
///
/// Adapters only surface publishable entries, so there is no publication
/// flag here. `parent_id` is present only for variants; a variant with a
/// missing parent is tolerated (inheritance falls through to defaults).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Entry identity
    pub id: EntityId,

    /// Base or variant
    pub kind: EntryKind,

    /// Display title
    pub title: String,

    /// Long-form raw description (may contain markup)
    pub description: String,

    /// Short-form raw description
    pub short_description: String,

    /// Parent entry identity, present only for variants
    pub parent_id: Option<EntityId>,
}

impl CatalogEntry {
    /// Creates a base entry
    pub fn base(id: impl Into<EntityId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: EntryKind::Base,
            title: title.into(),
            description: String::new(),
            short_description: String::new(),
            parent_id: None,
        }
    }

    /// Creates a variant entry bound to a parent
    pub fn variant(
        id: impl Into<EntityId>,
        parent_id: impl Into<EntityId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: EntryKind::Variant,
            title: title.into(),
            description: String::new(),
            short_description: String::new(),
            parent_id: Some(parent_id.into()),
        }
    }

    /// Sets the long-form description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the short-form description
    pub fn with_short_description(mut self, short_description: impl Into<String>) -> Self {
        self.short_description = short_description.into();
        self
    }

    /// Returns true for variant entries
    pub fn is_variant(&self) -> bool {
        self.kind == EntryKind::Variant
    }
}
