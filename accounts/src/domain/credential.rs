//! Credential record and its validated components.
//!
//! Purpose: strongly typed identity data shared by registration and login.
//! Types are immutable after construction; a credential has no update path
//! in this core: it is created once and only ever read.

use std::fmt;

use serde::Serialize;

use crate::domain::secret::{PasswordHash, Salt};
use crate::domain::staff_id::StaffId;

/// Validation errors returned by the credential component constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialValidationError {
    EmptyName,
    EmptyEmail,
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "staff name must not be empty"),
            Self::EmptyEmail => write!(f, "email address must not be empty"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Display name of a staff member.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace; otherwise arbitrary text.
///
/// The name also yields the two staff-ID initials: the first character of
/// the first whitespace-separated token and the first character of the last
/// token, uppercased. A single-token name contributes both initials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StaffName(String);

impl StaffName {
    /// Validate and construct a [`StaffName`].
    pub fn new(name: impl Into<String>) -> Result<Self, CredentialValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CredentialValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Uppercased initials of the first and last name tokens.
    pub fn initials(&self) -> (char, char) {
        let mut tokens = self.0.split_whitespace();
        // Validated non-empty after trimming, so a first token always exists.
        let first_token = tokens.next().unwrap_or_default();
        let last_token = tokens.last().unwrap_or(first_token);
        (initial_of(first_token), initial_of(last_token))
    }
}

fn initial_of(token: &str) -> char {
    // Tokens from split_whitespace are never empty; the fallback is unreachable.
    token
        .chars()
        .flat_map(char::to_uppercase)
        .next()
        .unwrap_or('X')
}

impl AsRef<str> for StaffName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for StaffName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<StaffName> for String {
    fn from(value: StaffName) -> Self {
        value.0
    }
}

/// Login identifier for a credential.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
/// - Case-sensitive as stored; syntax validation and normalisation are the
///   inbound collaborator's concern and happen before this core is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, CredentialValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(CredentialValidationError::EmptyEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Persisted identity record.
///
/// ## Invariants
/// - `email` and `staff_id` are unique across all credentials (enforced by
///   the persistence adapter's constraints).
/// - `password_hash` and `salt` are always both present and both exactly the
///   hashing scheme's fixed length.
/// - Immutable after creation: created once by registration, read by login,
///   never mutated or deleted within this core.
#[derive(Debug, Clone)]
pub struct Credential {
    name: StaffName,
    email: EmailAddress,
    staff_id: StaffId,
    password_hash: PasswordHash,
    salt: Salt,
}

impl Credential {
    /// Assemble a credential from validated components.
    pub fn new(
        name: StaffName,
        email: EmailAddress,
        staff_id: StaffId,
        password_hash: PasswordHash,
        salt: Salt,
    ) -> Self {
        Self {
            name,
            email,
            staff_id,
            password_hash,
            salt,
        }
    }

    /// Display name of the holder.
    pub fn name(&self) -> &StaffName {
        &self.name
    }

    /// Login identifier.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Issued staff identifier.
    pub fn staff_id(&self) -> &StaffId {
        &self.staff_id
    }

    /// Stored peppered hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Stored per-credential salt.
    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    /// Reduce to the identity projection returned on successful login,
    /// dropping (and thereby wiping) the secret material.
    pub fn into_identity(self) -> StaffIdentity {
        StaffIdentity {
            name: self.name,
            staff_id: self.staff_id,
        }
    }
}

/// Identity data returned to the caller after a successful authentication.
///
/// Serialises to the `{name, staffId}` shape the HTTP collaborator returns
/// on login. Deliberately not deserialisable: identities are only ever
/// produced from a verified credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffIdentity {
    name: StaffName,
    staff_id: StaffId,
}

impl StaffIdentity {
    /// Display name of the authenticated staff member.
    pub fn name(&self) -> &StaffName {
        &self.name
    }

    /// Staff identifier of the authenticated staff member.
    pub fn staff_id(&self) -> &StaffId {
        &self.staff_id
    }
}
