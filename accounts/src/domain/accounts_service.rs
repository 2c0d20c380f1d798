//! Registration and login orchestration.
//!
//! This module implements the driving ports for account registration and
//! authentication. Both flows are shaped around two non-negotiable
//! constraints: response cost must not reveal account existence, and secret
//! buffers are wiped on every exit path (the hash/salt newtypes wipe on
//! drop, so early returns and failures are covered without a cleanup
//! ceremony).

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::auth::{LoginCredentials, RegistrationRequest};
use crate::domain::credential::{Credential, StaffIdentity};
use crate::domain::error::AccountsError;
use crate::domain::ports::{
    AccountAuthenticator, AccountRegistrar, CredentialHasher, CredentialPersistenceError,
    CredentialRepository, RegistrationOutcome, SuffixSource, ThreadRngSuffixSource,
};
use crate::domain::secret::{PasswordHash, Salt};
use crate::domain::staff_id_generator::StaffIdGenerator;

/// Accounts service implementing the registration and login driving ports.
#[derive(Clone)]
pub struct AccountsService<R, H, S = ThreadRngSuffixSource> {
    repository: Arc<R>,
    hasher: Arc<H>,
    staff_ids: StaffIdGenerator<R, S>,
}

impl<R, H> AccountsService<R, H> {
    /// Create a service drawing staff-ID suffixes from the thread-local RNG.
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self::with_suffix_source(repository, hasher, ThreadRngSuffixSource)
    }
}

impl<R, H, S> AccountsService<R, H, S> {
    /// Create a service with an injected staff-ID suffix source.
    pub fn with_suffix_source(repository: Arc<R>, hasher: Arc<H>, suffixes: S) -> Self {
        Self {
            staff_ids: StaffIdGenerator::with_suffix_source(repository.clone(), suffixes),
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<R, H, S> AccountRegistrar for AccountsService<R, H, S>
where
    R: CredentialRepository,
    H: CredentialHasher,
    S: SuffixSource,
{
    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationOutcome, AccountsError> {
        // Hashing and minting run before the duplicate lookup so a duplicate
        // attempt costs the same wall clock as a fresh one; reordering this
        // reintroduces a timing oracle on account existence.
        let (hash, salt) = self.hasher.create_hash(request.password())?;
        let staff_id = self.staff_ids.generate(request.name()).await?;

        if self
            .repository
            .find_by_email(request.email())
            .await?
            .is_some()
        {
            debug!("registration rejected by duplicate pre-check");
            return Ok(RegistrationOutcome::Duplicate);
        }

        let (name, email) = request.into_parts();
        let credential = Credential::new(name, email, staff_id, hash, salt);

        match self.repository.create(&credential).await {
            Ok(()) => Ok(RegistrationOutcome::Registered),
            // Two concurrent registrations can both pass the pre-check; the
            // store's uniqueness constraint is the authoritative backstop and
            // losing that race is an expected business outcome.
            Err(CredentialPersistenceError::UniqueViolation { .. }) => {
                debug!("registration rejected by persistence constraint");
                Ok(RegistrationOutcome::Duplicate)
            }
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait]
impl<R, H, S> AccountAuthenticator for AccountsService<R, H, S>
where
    R: CredentialRepository,
    H: CredentialHasher,
    S: SuffixSource,
{
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<StaffIdentity>, AccountsError> {
        let existing = self.repository.find_by_email(credentials.email()).await?;

        // Absent accounts are compared against zeroed stand-ins of the
        // scheme's fixed lengths, so the verifier runs at full cost exactly
        // once per attempt whether or not the account exists.
        let (hash, salt) = match &existing {
            Some(credential) => (
                credential.password_hash().clone(),
                credential.salt().clone(),
            ),
            None => (PasswordHash::zeroed(), Salt::zeroed()),
        };

        let matched = self.hasher.compare(credentials.password(), &hash, &salt)?;

        Ok(existing
            .filter(|_| matched)
            .map(Credential::into_identity))
    }
}
