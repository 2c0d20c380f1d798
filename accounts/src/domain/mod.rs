//! Domain types, ports, and orchestration for the accounts core.
//!
//! Purpose: define strongly typed, immutable domain entities and the
//! use-case services operating on them. Validation lives in the type
//! constructors; invariants are documented in each type's Rustdoc.
//!
//! Public surface:
//! - [`AccountsService`] — registration and login orchestration.
//! - [`Credential`] / [`StaffIdentity`] — the persisted record and its
//!   login-time projection.
//! - [`StaffIdGenerator`] — bounded-retry unique identifier minting.
//! - [`ports`] — the hexagonal boundary consumed by adapters.

pub mod accounts_service;
pub mod auth;
pub mod credential;
pub mod error;
pub mod ports;
pub mod secret;
pub mod staff_id;
pub mod staff_id_generator;

pub use self::accounts_service::AccountsService;
pub use self::auth::{AuthValidationError, LoginCredentials, RegistrationRequest};
pub use self::credential::{
    Credential, CredentialValidationError, EmailAddress, StaffIdentity, StaffName,
};
pub use self::error::AccountsError;
pub use self::ports::RegistrationOutcome;
pub use self::secret::{HASH_LEN, PasswordHash, SALT_LEN, Salt};
pub use self::staff_id::{StaffId, StaffIdValidationError};
pub use self::staff_id_generator::{MAX_STAFF_ID_ATTEMPTS, StaffIdGenerator};
