//! Peppered password hashing pipeline.
//!
//! The stored hash is `HMAC-SHA512(pepper, Argon2id(password, salt))`. The
//! memory-hard KDF is deliberately expensive (hundreds of milliseconds is
//! acceptable and desired for brute-force resistance) and runs with fixed
//! cost parameters on every call. The intermediate digest lives in
//! wiped-on-drop memory so every exit path, including KDF and MAC failures,
//! leaves no secret material behind.

use argon2::{Algorithm, Argon2, Params, Version};
use hmac::{Hmac, Mac};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha512;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::domain::ports::{CredentialHasher, HashingError};
use crate::domain::{HASH_LEN, PasswordHash, SALT_LEN, Salt};
use crate::security::pepper::Pepper;

/// Argon2id degree of parallelism.
const KDF_LANES: u32 = 1;
/// Argon2id iteration count.
const KDF_ITERATIONS: u32 = 2;
/// Argon2id memory cost in KiB.
const KDF_MEMORY_KIB: u32 = 19_456;
/// Length in bytes of the intermediate digest fed into the keyed hash.
const KDF_DIGEST_LEN: usize = 128;

type PepperedMac = Hmac<Sha512>;

/// Fixed-time equality over equal-length secret byte strings.
///
/// Every byte pair is inspected; comparison cost is independent of where, or
/// whether, the inputs differ. This is a correctness property of the login
/// path, not an optimisation, so it lives in one explicit primitive instead
/// of scattered `==` calls.
pub fn fixed_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Concrete [`CredentialHasher`] combining Argon2id with an HMAC-SHA512
/// pepper stage.
///
/// The pepper is injected at construction and kept for the lifetime of the
/// hasher; it is never stored with a credential.
pub struct PepperedHasher {
    pepper: Pepper,
    params: Params,
}

impl PepperedHasher {
    /// Build a hasher around the process pepper.
    pub fn new(pepper: Pepper) -> Self {
        let params = Params::new(
            KDF_MEMORY_KIB,
            KDF_ITERATIONS,
            KDF_LANES,
            Some(KDF_DIGEST_LEN),
        )
        .unwrap_or_else(|error| panic!("fixed KDF parameters must be valid: {error}"));
        Self { pepper, params }
    }

    fn derive_digest(
        &self,
        password: &str,
        salt: &Salt,
    ) -> Result<Zeroizing<[u8; KDF_DIGEST_LEN]>, HashingError> {
        let mut digest = Zeroizing::new([0u8; KDF_DIGEST_LEN]);
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
            .hash_password_into(password.as_bytes(), salt.as_bytes(), digest.as_mut_slice())
            .map_err(|error| HashingError::kdf(error.to_string()))?;
        Ok(digest)
    }

    fn keyed_hash(&self, digest: &[u8]) -> Result<Zeroizing<[u8; HASH_LEN]>, HashingError> {
        let mut mac = PepperedMac::new_from_slice(self.pepper.as_bytes())
            .map_err(|error| HashingError::mac(error.to_string()))?;
        mac.update(digest);
        let mut tag = mac.finalize().into_bytes();

        let mut out = Zeroizing::new([0u8; HASH_LEN]);
        out.copy_from_slice(tag.as_slice());
        tag.as_mut_slice().zeroize();
        Ok(out)
    }
}

impl CredentialHasher for PepperedHasher {
    fn create_hash(&self, password: &str) -> Result<(PasswordHash, Salt), HashingError> {
        let mut salt_bytes = Zeroizing::new([0u8; SALT_LEN]);
        OsRng
            .try_fill_bytes(salt_bytes.as_mut_slice())
            .map_err(|error| HashingError::randomness(error.to_string()))?;
        let salt = Salt::from_bytes(*salt_bytes);

        let digest = self.derive_digest(password, &salt)?;
        let hash = self.keyed_hash(digest.as_slice())?;
        Ok((PasswordHash::from_bytes(*hash), salt))
    }

    fn compare(
        &self,
        password: &str,
        stored: &PasswordHash,
        salt: &Salt,
    ) -> Result<bool, HashingError> {
        let digest = self.derive_digest(password, salt)?;
        let recomputed = self.keyed_hash(digest.as_slice())?;
        Ok(fixed_time_eq(recomputed.as_slice(), stored.as_bytes()))
    }
}
