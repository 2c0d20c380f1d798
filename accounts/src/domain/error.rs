//! Domain-level error types.
//!
//! Only fatal, unrecoverable failures surface as errors here. The expected
//! negative outcomes (a duplicate email on registration, wrong or unknown
//! credentials on login) are ordinary values, never `Err`, so the caller
//! cannot accidentally leak which one occurred through error handling.

use crate::domain::ports::{CredentialPersistenceError, HashingError};

/// Fatal failures raised by the accounts core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountsError {
    /// The persistence collaborator failed.
    #[error(transparent)]
    Repository(#[from] CredentialPersistenceError),
    /// The hashing pipeline failed (randomness, KDF, or keyed hash).
    #[error(transparent)]
    Hashing(#[from] HashingError),
    /// Staff-ID minting hit the collision retry bound, which means the
    /// suffix space is near-exhausted or the uniqueness lookup is
    /// malfunctioning.
    #[error("staff id minting exhausted after {attempts} attempts")]
    StaffIdExhausted {
        /// Number of minting attempts performed before giving up.
        attempts: u32,
    },
}
