//! Driving port for the login use-case.

use async_trait::async_trait;

use crate::domain::auth::LoginCredentials;
use crate::domain::credential::StaffIdentity;
use crate::domain::error::AccountsError;

/// Domain use-case port for authentication.
#[async_trait]
pub trait AccountAuthenticator: Send + Sync {
    /// Verify credentials and return the holder's identity.
    ///
    /// Returns `None` for both an unknown email and a wrong password; the
    /// two cases are indistinguishable to the caller by value and by
    /// wall-clock time, because the verifier runs at full cost either way.
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<StaffIdentity>, AccountsError>;
}
