//! Taxonomy membership domain model
//!
//! Taxonomies are named classification axes (category, brand, ...) whose
//! terms form a parent-linked forest. The store returns flat term
//! assignments; [`TaxonomyIndex`] folds them into the three lookups the
//! product export needs: entity→taxonomy→terms, term→parent, term→name.
//!
//! The data model forbids cycles, but the walk in
//! `core::transform::hierarchy` still guards against them — bad data must
//! truncate a path, never hang the export.

use crate::domain::ids::{EntityId, TermId};
use std::collections::HashMap;

/// Taxonomy name for the category hierarchy
pub const TAXONOMY_CATEGORY: &str = "category";

/// Brand-like taxonomy names in fixed priority order
///
/// The first taxonomy with a non-empty membership wins; its first term's
/// name becomes the exported manufacturer.
pub const BRAND_TAXONOMIES: &[&str] = &["manufacturer", "brand"];

/// Taxonomies the product export reads in one bulk fetch
pub const EXPORT_TAXONOMIES: &[&str] = &[TAXONOMY_CATEGORY, "manufacturer", "brand"];

/// One flat term assignment row as returned by the store
///
/// This is the typed record produced at the query-layer boundary; nothing
/// driver-shaped escapes the adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermAssignment {
    /// Entity the term is assigned to
    pub entity_id: EntityId,
    /// Taxonomy the term belongs to
    pub taxonomy: String,
    /// Term identity
    pub term_id: TermId,
    /// Term display name
    pub term_name: String,
    /// Parent term, absent for roots
    pub parent_id: Option<TermId>,
}

/// Indexed taxonomy snapshot for one export invocation
#[derive(Debug, Clone, Default)]
pub struct TaxonomyIndex {
    /// entity → taxonomy → term ids, in assignment order
    memberships: HashMap<EntityId, HashMap<String, Vec<TermId>>>,
    /// term → parent term
    parents: HashMap<TermId, Option<TermId>>,
    /// term → display name
    names: HashMap<TermId, String>,
}

impl TaxonomyIndex {
    /// Builds the index from flat assignment rows
    pub fn from_assignments(rows: Vec<TermAssignment>) -> Self {
        let mut index = Self::default();
        for row in rows {
            index
                .memberships
                .entry(row.entity_id)
                .or_default()
                .entry(row.taxonomy)
                .or_default()
                .push(row.term_id);
            index.parents.insert(row.term_id, row.parent_id);
            index.names.insert(row.term_id, row.term_name);
        }
        index
    }

    /// Term ids assigned to an entity under a taxonomy, in assignment order
    pub fn terms_of(&self, entity: EntityId, taxonomy: &str) -> &[TermId] {
        self.memberships
            .get(&entity)
            .and_then(|by_taxonomy| by_taxonomy.get(taxonomy))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First term of an entity's membership under a taxonomy
    pub fn first_term_of(&self, entity: EntityId, taxonomy: &str) -> Option<TermId> {
        self.terms_of(entity, taxonomy).first().copied()
    }

    /// Parent of a term; `None` for roots or unknown terms
    pub fn parent_of(&self, term: TermId) -> Option<TermId> {
        self.parents.get(&term).copied().flatten()
    }

    /// Display name of a term, if known
    pub fn name_of(&self, term: TermId) -> Option<&str> {
        self.names.get(&term).map(String::as_str)
    }

    /// Brand name for an entity: first non-empty membership across the
    /// fixed brand taxonomy priority list, first term wins
    pub fn brand_of(&self, entity: EntityId) -> Option<&str> {
        for taxonomy in BRAND_TAXONOMIES {
            if let Some(term) = self.first_term_of(entity, taxonomy) {
                if let Some(name) = self.name_of(term) {
                    return Some(name);
                }
            }
        }
        None
    }
}
