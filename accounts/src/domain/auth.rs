//! Registration and login input pairs.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to the accounts
//! service. Password strength and email syntax checks belong to the inbound
//! collaborator and run before these types are built; this module only
//! enforces the shapes the core itself depends on.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::credential::{EmailAddress, StaffName};

/// Domain error returned when registration or login payload values are
/// invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// Name was missing or blank once trimmed.
    EmptyName,
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

/// Validated registration input.
///
/// ## Invariants
/// - `name` and `email` satisfy their domain newtype invariants.
/// - `password` is non-empty and retains caller-provided whitespace to avoid
///   surprising credential comparisons; it is held in wiped-on-drop memory.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    name: StaffName,
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl RegistrationRequest {
    /// Construct a request from raw name/email/password inputs.
    ///
    /// # Examples
    /// ```
    /// use caseworker_accounts::domain::RegistrationRequest;
    ///
    /// let request =
    ///     RegistrationRequest::try_from_parts("John Doe", "john.doe@example.test", "Password1!")
    ///         .unwrap();
    /// assert_eq!(request.name().as_ref(), "John Doe");
    /// ```
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, AuthValidationError> {
        let name = StaffName::new(name).map_err(|_| AuthValidationError::EmptyName)?;
        let email = EmailAddress::new(email).map_err(|_| AuthValidationError::EmptyEmail)?;
        if password.is_empty() {
            return Err(AuthValidationError::EmptyPassword);
        }
        Ok(Self {
            name,
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Display name to register.
    pub fn name(&self) -> &StaffName {
        &self.name
    }

    /// Login identifier to register.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plaintext password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Split into the parts persisted on the credential, dropping (and
    /// thereby wiping) the password.
    pub fn into_parts(self) -> (StaffName, EmailAddress) {
        let Self {
            name,
            email,
            password,
        } = self;
        drop(password);
        (name, email)
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` satisfies the [`EmailAddress`] invariants.
/// - `password` is non-empty and held in wiped-on-drop memory.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, AuthValidationError> {
        let email = EmailAddress::new(email).map_err(|_| AuthValidationError::EmptyEmail)?;
        if password.is_empty() {
            return Err(AuthValidationError::EmptyPassword);
        }
        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email address used for the credential lookup.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
