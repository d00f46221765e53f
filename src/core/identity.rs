//! Customer identity pseudonymization
//!
//! The feed carries a stable customer identity so the analytics service can
//! group orders per customer without ever seeing the contact identifier.
//! The digest is one-way; the raw identifier never appears in output.

use sha2::{Digest, Sha256};

/// One-way digest of a contact identifier
///
/// Stable: the same identifier always produces the same digest. Returns a
/// 64-character lowercase hex string.
///
/// # Examples
///
/// ```
/// use mercator::core::identity::contact_digest;
///
/// let digest = contact_digest("jane@example.com");
/// assert_eq!(digest.len(), 64);
/// assert_eq!(digest, contact_digest("jane@example.com"));
/// ```
pub fn contact_digest(contact: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contact.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
