//! Driving port for the registration use-case.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! register accounts without knowing (or importing) the backing hashing and
//! persistence infrastructure.

use async_trait::async_trait;

use crate::domain::auth::RegistrationRequest;
use crate::domain::error::AccountsError;

/// Outcome of a registration attempt.
///
/// A duplicate is an expected business outcome, not an error. Adapters map
/// it to a generic failure response that never reveals which field
/// conflicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// A new credential was persisted.
    Registered,
    /// An existing credential already claims the email (or the persistence
    /// constraint rejected the insert during a concurrent race).
    Duplicate,
}

impl RegistrationOutcome {
    /// Whether the attempt created a credential.
    pub fn is_registered(self) -> bool {
        matches!(self, Self::Registered)
    }
}

/// Domain use-case port for registration.
#[async_trait]
pub trait AccountRegistrar: Send + Sync {
    /// Hash the password, mint a staff ID, arbitrate duplicates, and
    /// persist. Duplicate attempts still pay the full cryptographic and
    /// minting cost before being rejected.
    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationOutcome, AccountsError>;
}
