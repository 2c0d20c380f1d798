//! In-memory credential repository.
//!
//! Reference adapter for the persistence port. It enforces the same
//! uniqueness constraints a relational schema declares (unique email,
//! unique staff ID) so the registration race's authoritative backstop is
//! exercised without a database. Suitable for tests and local tooling, not
//! for durable deployments.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ports::{CredentialPersistenceError, CredentialRepository};
use crate::domain::{Credential, EmailAddress, StaffId};

/// Credential store backed by a mutex-guarded vector.
#[derive(Debug, Default)]
pub struct MemoryCredentialRepository {
    records: Mutex<Vec<Credential>>,
}

impl MemoryCredentialRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted credentials.
    pub async fn count(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl CredentialRepository for MemoryCredentialRepository {
    async fn create(&self, credential: &Credential) -> Result<(), CredentialPersistenceError> {
        let mut records = self.records.lock().await;
        if records
            .iter()
            .any(|existing| existing.email() == credential.email())
        {
            return Err(CredentialPersistenceError::unique_violation(
                "email already registered",
            ));
        }
        if records
            .iter()
            .any(|existing| existing.staff_id() == credential.staff_id())
        {
            return Err(CredentialPersistenceError::unique_violation(
                "staff id already issued",
            ));
        }
        records.push(credential.clone());
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, CredentialPersistenceError> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .find(|credential| credential.email() == email)
            .cloned())
    }

    async fn find_by_staff_id(
        &self,
        staff_id: &StaffId,
    ) -> Result<Option<Credential>, CredentialPersistenceError> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .find(|credential| credential.staff_id() == staff_id)
            .cloned())
    }
}
