//! Domain ports and supporting types for the hexagonal boundary.

mod account_authenticator;
mod account_registrar;
mod credential_hasher;
mod credential_repository;
mod suffix_source;

pub use account_authenticator::AccountAuthenticator;
pub use account_registrar::{AccountRegistrar, RegistrationOutcome};
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, FixtureCredentialHasher, HashingError};
#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
pub use credential_repository::{
    CredentialPersistenceError, CredentialRepository, FixtureCredentialRepository,
};
#[cfg(test)]
pub use suffix_source::MockSuffixSource;
pub use suffix_source::{SuffixSource, ThreadRngSuffixSource};
