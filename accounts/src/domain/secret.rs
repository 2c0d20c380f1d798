//! Fixed-length secret byte buffers with guaranteed wipe-on-drop.
//!
//! Hash and salt material is owned exclusively by the call that created it
//! and must be wiped before that call returns on every exit path. Wrapping
//! the bytes in zeroize-on-drop newtypes makes the wipe unconditional:
//! normal return, early return, and failure all run the destructor.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length in bytes of a stored password hash (HMAC-SHA512 output).
pub const HASH_LEN: usize = 64;

/// Length in bytes of a per-credential salt.
pub const SALT_LEN: usize = 64;

/// Final peppered password hash as persisted alongside a credential.
///
/// ## Invariants
/// - Always exactly [`HASH_LEN`] bytes.
/// - Wiped when dropped; `Debug` never reveals the bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PasswordHash([u8; HASH_LEN]);

impl PasswordHash {
    /// Wrap raw hash bytes produced by the hashing pipeline or loaded from
    /// storage.
    pub fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// All-zero stand-in compared against when no credential exists, keeping
    /// the verification cost of a login attempt independent of whether the
    /// account is present.
    pub fn zeroed() -> Self {
        Self([0u8; HASH_LEN])
    }

    /// Raw bytes, for persistence adapters and fixed-time comparison.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Per-credential random salt.
///
/// Not secret in itself, but handled with the same wipe discipline as the
/// hash it is paired with.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    /// Wrap raw salt bytes.
    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }

    /// All-zero stand-in for the absent-account comparison path.
    pub fn zeroed() -> Self {
        Self([0u8; SALT_LEN])
    }

    /// Raw bytes, for the key-derivation function and persistence adapters.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Salt(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_buffers_have_scheme_lengths() {
        assert_eq!(PasswordHash::zeroed().as_bytes().len(), HASH_LEN);
        assert_eq!(Salt::zeroed().as_bytes().len(), SALT_LEN);
        assert!(PasswordHash::zeroed().as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn debug_output_is_redacted() {
        let hash = PasswordHash::from_bytes([0xAB; HASH_LEN]);
        let salt = Salt::from_bytes([0xCD; SALT_LEN]);
        assert_eq!(format!("{hash:?}"), "PasswordHash(..)");
        assert_eq!(format!("{salt:?}"), "Salt(..)");
    }

    #[test]
    fn from_bytes_round_trips() {
        let hash = PasswordHash::from_bytes([7; HASH_LEN]);
        assert_eq!(hash.as_bytes(), [7u8; HASH_LEN]);
    }
}
