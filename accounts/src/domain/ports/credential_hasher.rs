//! Port for the password hashing and verification pipeline.
//!
//! Registration and login orchestration depend on this seam rather than the
//! concrete pipeline so tests can substitute instrumented doubles; the
//! always-verify property of the login path is asserted by counting calls
//! through this trait.

use crate::domain::secret::{PasswordHash, Salt};

/// Failures of the hashing pipeline. All of these are fatal: they indicate a
/// broken runtime environment, not a bad password.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashingError {
    /// The operating system CSPRNG could not produce salt bytes.
    #[error("secure randomness unavailable: {message}")]
    Randomness {
        /// Underlying failure detail.
        message: String,
    },
    /// The key-derivation function rejected its inputs or failed to run.
    #[error("key derivation failed: {message}")]
    Kdf {
        /// Underlying failure detail.
        message: String,
    },
    /// The keyed hash over the derived digest failed.
    #[error("keyed hashing failed: {message}")]
    Mac {
        /// Underlying failure detail.
        message: String,
    },
}

impl HashingError {
    /// Randomness-failure constructor.
    pub fn randomness(message: impl Into<String>) -> Self {
        Self::Randomness {
            message: message.into(),
        }
    }

    /// KDF-failure constructor.
    pub fn kdf(message: impl Into<String>) -> Self {
        Self::Kdf {
            message: message.into(),
        }
    }

    /// Keyed-hash-failure constructor.
    pub fn mac(message: impl Into<String>) -> Self {
        Self::Mac {
            message: message.into(),
        }
    }
}

/// Port for deriving and verifying peppered password hashes.
///
/// Both operations run the full-cost pipeline; `compare` must take the same
/// work whether or not the inputs match, and implementations must wipe every
/// transient secret buffer on every exit path.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Derive a fresh salt and the peppered hash of `password`.
    fn create_hash(&self, password: &str) -> Result<(PasswordHash, Salt), HashingError>;

    /// Recompute the pipeline with the stored salt and compare against the
    /// stored hash in fixed time. `true` only on an exact match of every
    /// byte.
    fn compare(
        &self,
        password: &str,
        stored: &PasswordHash,
        salt: &Salt,
    ) -> Result<bool, HashingError>;
}

/// Deterministic stand-in hasher for tests that exercise orchestration
/// rather than cryptography.
///
/// A single unkeyed SHA-512 digest replaces the real memory-hard pipeline,
/// and the salt is fixed. Never use outside tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCredentialHasher;

impl FixtureCredentialHasher {
    fn digest(password: &str) -> PasswordHash {
        use sha2::{Digest, Sha512};

        let digest = Sha512::digest(password.as_bytes());
        let mut bytes = [0u8; crate::domain::secret::HASH_LEN];
        bytes.copy_from_slice(&digest);
        PasswordHash::from_bytes(bytes)
    }
}

impl CredentialHasher for FixtureCredentialHasher {
    fn create_hash(&self, password: &str) -> Result<(PasswordHash, Salt), HashingError> {
        Ok((Self::digest(password), Salt::zeroed()))
    }

    fn compare(
        &self,
        password: &str,
        stored: &PasswordHash,
        _salt: &Salt,
    ) -> Result<bool, HashingError> {
        use subtle::ConstantTimeEq;

        let recomputed = Self::digest(password);
        Ok(recomputed.as_bytes().ct_eq(stored.as_bytes()).into())
    }
}
