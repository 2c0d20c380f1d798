//! Human-readable staff identifier.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Validation errors returned by [`StaffId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaffIdValidationError {
    EmptyStaffId,
    InvalidFormat,
}

impl fmt::Display for StaffIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStaffId => write!(f, "staff id must not be empty"),
            Self::InvalidFormat => {
                write!(f, "staff id must match E<II>-CTS-<DDDD>")
            }
        }
    }
}

impl std::error::Error for StaffIdValidationError {}

static STAFF_ID_RE: OnceLock<Regex> = OnceLock::new();

fn staff_id_regex() -> &'static Regex {
    STAFF_ID_RE.get_or_init(|| {
        let pattern = "^E[A-Z]{2}-CTS-[0-9]{4}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("staff id regex failed to compile: {error}"))
    })
}

/// Unique human-readable staff identifier in the form `E<II>-CTS-<DDDD>`,
/// where `II` are two uppercase initials and `DDDD` a zero-padded number.
///
/// Uniqueness rests entirely on the random suffix and the minting retry
/// loop; the initials are derived from the holder's name and are not
/// expected to be unique.
///
/// # Examples
/// ```
/// use caseworker_accounts::domain::StaffId;
///
/// let id = StaffId::new("EJD-CTS-0042").unwrap();
/// assert_eq!(id.as_ref(), "EJD-CTS-0042");
/// assert!(StaffId::new("EJD-CTS-42").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StaffId(String);

impl StaffId {
    /// Validate and construct a [`StaffId`] from stored or external input.
    pub fn new(value: impl Into<String>) -> Result<Self, StaffIdValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(StaffIdValidationError::EmptyStaffId);
        }
        if !staff_id_regex().is_match(&value) {
            return Err(StaffIdValidationError::InvalidFormat);
        }
        Ok(Self(value))
    }

    /// Assemble an identifier from minting parts.
    ///
    /// Initials come straight from the holder's name without sanitisation;
    /// the suffix is reduced to four digits.
    pub(crate) fn from_parts(first: char, second: char, suffix: u16) -> Self {
        let suffix = suffix % 10_000;
        Self(format!("E{first}{second}-CTS-{suffix:04}"))
    }
}

impl AsRef<str> for StaffId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<StaffId> for String {
    fn from(value: StaffId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("EJD-CTS-0000")]
    #[case("EAB-CTS-9999")]
    #[case("EZZ-CTS-0420")]
    fn accepts_canonical_identifiers(#[case] value: &str) {
        let id = StaffId::new(value).expect("canonical id should parse");
        assert_eq!(id.as_ref(), value);
    }

    #[rstest]
    #[case("", StaffIdValidationError::EmptyStaffId)]
    #[case("   ", StaffIdValidationError::EmptyStaffId)]
    #[case("EJD-CTS-123", StaffIdValidationError::InvalidFormat)]
    #[case("EJD-CTS-12345", StaffIdValidationError::InvalidFormat)]
    #[case("Ejd-CTS-1234", StaffIdValidationError::InvalidFormat)]
    #[case("EJD-DTS-1234", StaffIdValidationError::InvalidFormat)]
    #[case("XJD-CTS-1234", StaffIdValidationError::InvalidFormat)]
    fn rejects_malformed_identifiers(
        #[case] value: &str,
        #[case] expected: StaffIdValidationError,
    ) {
        let err = StaffId::new(value).expect_err("malformed id must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case('J', 'D', 7, "EJD-CTS-0007")]
    #[case('A', 'B', 9999, "EAB-CTS-9999")]
    #[case('C', 'C', 0, "ECC-CTS-0000")]
    fn assembles_from_parts(
        #[case] first: char,
        #[case] second: char,
        #[case] suffix: u16,
        #[case] expected: &str,
    ) {
        assert_eq!(StaffId::from_parts(first, second, suffix).as_ref(), expected);
    }

    #[test]
    fn from_parts_reduces_oversized_suffixes_to_four_digits() {
        assert_eq!(StaffId::from_parts('J', 'D', 10_007).as_ref(), "EJD-CTS-0007");
    }

    #[test]
    fn serialises_as_a_bare_string() {
        let id = StaffId::new("EJD-CTS-1234").expect("valid id");
        let json = serde_json::to_string(&id).expect("serialise staff id");
        assert_eq!(json, "\"EJD-CTS-1234\"");
    }
}
