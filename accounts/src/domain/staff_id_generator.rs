//! Staff-ID minting with bounded collision retry.

use std::sync::Arc;

use tracing::warn;

use crate::domain::credential::StaffName;
use crate::domain::error::AccountsError;
use crate::domain::ports::{CredentialRepository, SuffixSource, ThreadRngSuffixSource};
use crate::domain::staff_id::StaffId;

/// Maximum minting attempts before the generator gives up.
///
/// The suffix space is 10 000 wide per initials pair, so hitting this bound
/// under normal load means the space is near-exhausted or the uniqueness
/// lookup is malfunctioning; minting must not loop unboundedly.
pub const MAX_STAFF_ID_ATTEMPTS: u32 = 100;

/// Mints unique staff identifiers against the repository's staff-ID lookup.
///
/// The initials are derived from the holder's name once; on collision only
/// the random suffix is regenerated.
#[derive(Clone)]
pub struct StaffIdGenerator<R, S = ThreadRngSuffixSource> {
    repository: Arc<R>,
    suffixes: S,
}

impl<R> StaffIdGenerator<R> {
    /// Create a generator drawing suffixes from the thread-local RNG.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_suffix_source(repository, ThreadRngSuffixSource)
    }
}

impl<R, S> StaffIdGenerator<R, S> {
    /// Create a generator with an injected suffix source.
    pub fn with_suffix_source(repository: Arc<R>, suffixes: S) -> Self {
        Self {
            repository,
            suffixes,
        }
    }
}

impl<R, S> StaffIdGenerator<R, S>
where
    R: CredentialRepository,
    S: SuffixSource,
{
    /// Mint an identifier that no persisted credential currently holds.
    ///
    /// Each attempt draws a fresh suffix and consults the uniqueness oracle;
    /// after [`MAX_STAFF_ID_ATTEMPTS`] collisions the attempt is abandoned
    /// as fatal.
    pub async fn generate(&self, name: &StaffName) -> Result<StaffId, AccountsError> {
        let (first, second) = name.initials();

        for _ in 0..MAX_STAFF_ID_ATTEMPTS {
            let candidate = StaffId::from_parts(first, second, self.suffixes.next_suffix());
            if self
                .repository
                .find_by_staff_id(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }
        }

        warn!(
            attempts = MAX_STAFF_ID_ATTEMPTS,
            "staff id minting hit the collision retry bound"
        );
        Err(AccountsError::StaffIdExhausted {
            attempts: MAX_STAFF_ID_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::credential::{Credential, EmailAddress};
    use crate::domain::ports::{
        CredentialPersistenceError, MockCredentialRepository, MockSuffixSource,
    };
    use crate::domain::secret::{PasswordHash, Salt};

    fn holder(name: &str) -> StaffName {
        StaffName::new(name).expect("valid test name")
    }

    fn occupant(staff_id: &StaffId) -> Credential {
        Credential::new(
            holder("Taken Holder"),
            EmailAddress::new("taken@example.test").expect("valid email"),
            staff_id.clone(),
            PasswordHash::zeroed(),
            Salt::zeroed(),
        )
    }

    /// Suffix source that walks `0, 0, 1, 1, 2, 2, …` so a forced first
    /// collision per mint still leaves every suffix minted exactly once.
    #[derive(Default)]
    struct HalfStepSuffixSource(AtomicU32);

    impl SuffixSource for HalfStepSuffixSource {
        fn next_suffix(&self) -> u16 {
            u16::try_from(self.0.fetch_add(1, Ordering::SeqCst) / 2 % 10_000)
                .expect("suffix fits in u16")
        }
    }

    /// Uniqueness oracle that remembers every issued identifier and reports
    /// a collision on the first lookup after each call to [`Self::arm`].
    #[derive(Default)]
    struct ForcedCollisionOracle {
        issued: Mutex<HashSet<String>>,
        collide_next: AtomicBool,
    }

    impl ForcedCollisionOracle {
        fn arm(&self) {
            self.collide_next.store(true, Ordering::SeqCst);
        }

        fn issue(&self, staff_id: &StaffId) {
            self.issued
                .lock()
                .expect("issued lock")
                .insert(staff_id.as_ref().to_owned());
        }

        fn issued_count(&self) -> usize {
            self.issued.lock().expect("issued lock").len()
        }
    }

    #[async_trait]
    impl CredentialRepository for ForcedCollisionOracle {
        async fn create(
            &self,
            _credential: &Credential,
        ) -> Result<(), CredentialPersistenceError> {
            panic!("oracle does not persist");
        }

        async fn find_by_email(
            &self,
            _email: &EmailAddress,
        ) -> Result<Option<Credential>, CredentialPersistenceError> {
            panic!("oracle does not look up emails");
        }

        async fn find_by_staff_id(
            &self,
            staff_id: &StaffId,
        ) -> Result<Option<Credential>, CredentialPersistenceError> {
            if self.collide_next.swap(false, Ordering::SeqCst) {
                return Ok(Some(occupant(staff_id)));
            }
            let issued = self.issued.lock().expect("issued lock");
            Ok(issued
                .contains(staff_id.as_ref())
                .then(|| occupant(staff_id)))
        }
    }

    #[tokio::test]
    async fn mints_an_identifier_with_the_holder_initials() {
        let mut repository = MockCredentialRepository::new();
        repository
            .expect_find_by_staff_id()
            .times(1)
            .returning(|_| Ok(None));
        let mut suffixes = MockSuffixSource::new();
        suffixes.expect_next_suffix().times(1).return_const(42u16);

        let generator = StaffIdGenerator::with_suffix_source(Arc::new(repository), suffixes);
        let staff_id = generator
            .generate(&holder("John Doe"))
            .await
            .expect("minting succeeds");

        assert_eq!(staff_id.as_ref(), "EJD-CTS-0042");
    }

    #[tokio::test]
    async fn regenerates_only_the_suffix_on_collision() {
        let mut repository = MockCredentialRepository::new();
        repository
            .expect_find_by_staff_id()
            .times(2)
            .returning(|staff_id| {
                Ok((staff_id.as_ref() == "EJD-CTS-0001").then(|| occupant(staff_id)))
            });
        let mut suffixes = MockSuffixSource::new();
        let mut sequence = mockall::Sequence::new();
        suffixes
            .expect_next_suffix()
            .times(1)
            .in_sequence(&mut sequence)
            .return_const(1u16);
        suffixes
            .expect_next_suffix()
            .times(1)
            .in_sequence(&mut sequence)
            .return_const(2u16);

        let generator = StaffIdGenerator::with_suffix_source(Arc::new(repository), suffixes);
        let staff_id = generator
            .generate(&holder("John Doe"))
            .await
            .expect("minting succeeds after retry");

        assert_eq!(staff_id.as_ref(), "EJD-CTS-0002");
    }

    #[tokio::test]
    async fn one_hundred_forced_collisions_exhaust_the_bound() {
        let mut repository = MockCredentialRepository::new();
        repository
            .expect_find_by_staff_id()
            .times(100)
            .returning(|staff_id| Ok(Some(occupant(staff_id))));
        let mut suffixes = MockSuffixSource::new();
        suffixes.expect_next_suffix().times(100).return_const(7u16);

        let generator = StaffIdGenerator::with_suffix_source(Arc::new(repository), suffixes);
        let error = generator
            .generate(&holder("John Doe"))
            .await
            .expect_err("bound must be enforced");

        assert_eq!(error, AccountsError::StaffIdExhausted { attempts: 100 });
    }

    #[tokio::test]
    async fn repository_failures_propagate() {
        let mut repository = MockCredentialRepository::new();
        repository
            .expect_find_by_staff_id()
            .times(1)
            .returning(|_| Err(CredentialPersistenceError::connection("store offline")));
        let mut suffixes = MockSuffixSource::new();
        suffixes.expect_next_suffix().times(1).return_const(7u16);

        let generator = StaffIdGenerator::with_suffix_source(Arc::new(repository), suffixes);
        let error = generator
            .generate(&holder("John Doe"))
            .await
            .expect_err("lookup failure must surface");

        assert!(matches!(error, AccountsError::Repository(_)));
    }

    #[tokio::test]
    async fn ten_thousand_mints_with_forced_first_collisions_stay_unique() {
        let oracle = Arc::new(ForcedCollisionOracle::default());
        let generator = StaffIdGenerator::with_suffix_source(
            oracle.clone(),
            HalfStepSuffixSource::default(),
        );
        let name = holder("Casey Clash");

        for _ in 0..10_000 {
            oracle.arm();
            let staff_id = generator
                .generate(&name)
                .await
                .expect("minting succeeds despite the forced collision");
            oracle.issue(&staff_id);
        }

        assert_eq!(oracle.issued_count(), 10_000);
    }
}
