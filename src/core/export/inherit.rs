//! Parent-to-variant inheritance fallback chain
//!
//! A variant's effective description, image, and brand is its own value if
//! present, else the parent's, else empty. The policy lives here once and
//! is applied uniformly during assembly.

/// Returns the first candidate that is present and non-blank
///
/// Candidates are tried in order; `None` entries and values that are empty
/// after trimming fall through.
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}
