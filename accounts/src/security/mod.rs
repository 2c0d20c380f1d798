//! Cryptographic primitives behind the accounts core.
//!
//! Everything here is synchronous and CPU-bound: the memory-hard KDF, the
//! pepper stage, and the fixed-time comparison. The domain reaches these
//! through the [`crate::domain::ports::CredentialHasher`] port; nothing in
//! this module touches persistence.

mod hashing;
mod pepper;

pub use self::hashing::{PepperedHasher, fixed_time_eq};
pub use self::pepper::{Pepper, PepperError};
