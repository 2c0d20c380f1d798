//! Process-wide secret pepper.

use std::fmt;

use zeroize::Zeroizing;

/// Configuration errors raised while acquiring the pepper.
///
/// Either case is fatal at startup: the core cannot operate without a
/// pepper.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PepperError {
    /// The configured pepper value is empty.
    #[error("pepper value is empty")]
    Empty,
    /// The configuration source does not define the pepper at all.
    #[error("pepper environment variable {variable} is not set")]
    Missing {
        /// Name of the variable that was consulted.
        variable: String,
    },
}

/// Secret byte string mixed into every password hash.
///
/// ## Invariants
/// - Non-empty, read-only for the lifetime of the process, supplied once at
///   startup by the configuration collaborator.
/// - Held in wiped-on-drop memory only; never logged, serialized, or
///   persisted alongside credentials, so a database-only compromise cannot
///   reproduce valid hashes without also compromising the running process's
///   configuration.
pub struct Pepper(Zeroizing<Vec<u8>>);

impl Pepper {
    /// Wrap configured pepper bytes, rejecting an empty value.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, PepperError> {
        let bytes = Zeroizing::new(bytes.into());
        if bytes.is_empty() {
            return Err(PepperError::Empty);
        }
        Ok(Self(bytes))
    }

    /// Read the pepper from the deployment environment.
    ///
    /// Missing and blank values are both startup failures; there is no
    /// development fallback for this secret.
    pub fn from_env(variable: &str) -> Result<Self, PepperError> {
        match std::env::var(variable) {
            Ok(value) if value.trim().is_empty() => Err(PepperError::Empty),
            Ok(value) => Self::new(value.into_bytes()),
            Err(_) => Err(PepperError::Missing {
                variable: variable.to_owned(),
            }),
        }
    }

    /// Key material for the keyed hash. Crate-internal so the secret never
    /// crosses the library boundary.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Pepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pepper(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_bytes() {
        assert_eq!(Pepper::new(Vec::new()).expect_err("empty must fail"), PepperError::Empty);
    }

    #[test]
    fn accepts_configured_bytes() {
        let pepper = Pepper::new(b"test-pepper".to_vec()).expect("non-empty pepper");
        assert_eq!(pepper.as_bytes(), b"test-pepper");
    }

    #[test]
    fn debug_output_is_redacted() {
        let pepper = Pepper::new(b"super-secret".to_vec()).expect("non-empty pepper");
        assert_eq!(format!("{pepper:?}"), "Pepper(..)");
    }

    #[test]
    fn from_env_reads_the_configured_value() {
        temp_env::with_var("ACCOUNTS_TEST_PEPPER", Some("from-environment"), || {
            let pepper = Pepper::from_env("ACCOUNTS_TEST_PEPPER").expect("set variable");
            assert_eq!(pepper.as_bytes(), b"from-environment");
        });
    }

    #[test]
    fn from_env_fails_on_missing_variable() {
        temp_env::with_var_unset("ACCOUNTS_TEST_PEPPER", || {
            let err = Pepper::from_env("ACCOUNTS_TEST_PEPPER").expect_err("unset must fail");
            assert_eq!(
                err,
                PepperError::Missing {
                    variable: "ACCOUNTS_TEST_PEPPER".to_owned(),
                }
            );
        });
    }

    #[test]
    fn from_env_fails_on_blank_value() {
        temp_env::with_var("ACCOUNTS_TEST_PEPPER", Some("   "), || {
            let err = Pepper::from_env("ACCOUNTS_TEST_PEPPER").expect_err("blank must fail");
            assert_eq!(err, PepperError::Empty);
        });
    }
}
