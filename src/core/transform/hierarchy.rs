//! Category hierarchy path reconstruction
//!
//! Walks a category term upward through its parent links, prepending each
//! visited term's name. The walk stops at a root, at a term with no known
//! name, or when the next term's name is already on the path — the data
//! model forbids cycles but the walk must not trust that.

use crate::domain::ids::TermId;
use crate::domain::taxonomy::TaxonomyIndex;

/// Separator between category path segments
pub const CATEGORY_PATH_SEPARATOR: &str = " > ";

/// Builds the root-to-leaf category path for a leaf term
///
/// Returns an empty string when the leaf term has no known name.
pub fn category_path(index: &TaxonomyIndex, leaf: TermId) -> String {
    let mut path: Vec<&str> = Vec::new();
    let mut current = Some(leaf);

    while let Some(term) = current {
        let Some(name) = index.name_of(term) else {
            break;
        };
        path.insert(0, name);

        let Some(parent) = index.parent_of(term) else {
            break;
        };
        // Cycle guard: a repeated name ends the walk
        if index
            .name_of(parent)
            .is_some_and(|parent_name| path.contains(&parent_name))
        {
            break;
        }
        current = Some(parent);
    }

    path.join(CATEGORY_PATH_SEPARATOR)
}
