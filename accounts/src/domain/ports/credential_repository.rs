//! Port abstraction for credential persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::credential::{Credential, EmailAddress};
use crate::domain::staff_id::StaffId;

/// Persistence errors raised by credential repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialPersistenceError {
    /// Repository connection could not be established.
    #[error("credential repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure detail.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("credential repository query failed: {message}")]
    Query {
        /// Adapter-supplied failure detail.
        message: String,
    },
    /// An insert collided with the email or staff-ID uniqueness constraint.
    ///
    /// The constraint is the authoritative backstop for concurrent
    /// registrations that both pass the duplicate pre-check.
    #[error("credential uniqueness constraint violated: {message}")]
    UniqueViolation {
        /// Adapter-supplied constraint detail. Never shown to end users.
        message: String,
    },
}

impl CredentialPersistenceError {
    /// Connection-failure constructor.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Query-failure constructor.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Uniqueness-violation constructor.
    pub fn unique_violation(message: impl Into<String>) -> Self {
        Self::UniqueViolation {
            message: message.into(),
        }
    }
}

/// Port for credential storage and retrieval.
///
/// Adapters must enforce uniqueness of both the email address and the staff
/// identifier, reporting collisions as
/// [`CredentialPersistenceError::UniqueViolation`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Insert a new credential.
    async fn create(&self, credential: &Credential) -> Result<(), CredentialPersistenceError>;

    /// Fetch a credential by its email address.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, CredentialPersistenceError>;

    /// Fetch a credential by its staff identifier. Serves as the uniqueness
    /// oracle for staff-ID minting.
    async fn find_by_staff_id(
        &self,
        staff_id: &StaffId,
    ) -> Result<Option<Credential>, CredentialPersistenceError>;
}

/// Fixture implementation for testing without a real store.
///
/// Lookups always miss and inserts are discarded. Use it in unit tests where
/// persistence behaviour is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCredentialRepository;

#[async_trait]
impl CredentialRepository for FixtureCredentialRepository {
    async fn create(&self, _credential: &Credential) -> Result<(), CredentialPersistenceError> {
        Ok(())
    }

    async fn find_by_email(
        &self,
        _email: &EmailAddress,
    ) -> Result<Option<Credential>, CredentialPersistenceError> {
        Ok(None)
    }

    async fn find_by_staff_id(
        &self,
        _staff_id: &StaffId,
    ) -> Result<Option<Credential>, CredentialPersistenceError> {
        Ok(None)
    }
}
