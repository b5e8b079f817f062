//! Account store trait defining the interface for account persistence.
//!
//! The source system's ambient transaction plus row lock is abstracted here
//! as an explicit scoped lease: [`AccountStore::lock_for_update`] opens the
//! transactional unit and acquires exclusive access to one logical record,
//! and the returned [`AccountLease`] releases both on every exit path —
//! commit, explicit rollback, or plain drop when an error propagates.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::VerificationError;

/// Atomic partial update of an account record.
///
/// Only the fields the verifier is allowed to write appear here; everything
/// else on the record is out of its reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountPatch {
    /// New value for the last-accepted HOTP counter, if it is to change
    pub otp_last_counter: Option<u64>,
}

/// Store trait for account persistence operations
///
/// Implementations wrap the real database; the crate ships
/// [`MockAccountStore`](super::MockAccountStore) for tests. Row-level
/// exclusivity is the implementation's contract: while a lease for an
/// account is alive, no second lease for the same account may be granted.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Plain read of an account by identifier, outside any lock
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - account found
    /// * `Ok(None)` - no account with the given id
    /// * `Err(VerificationError)` - storage error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, VerificationError>;

    /// Begin a transactional unit and lock the account row for update
    ///
    /// Blocks until the row lock is available or the implementation's wait
    /// limit elapses.
    ///
    /// # Returns
    /// * `Ok(lease)` - exclusive access to the record until the lease ends
    /// * `Err(VerificationError::AccountNotFound)` - row does not exist;
    ///   the unit is rolled back
    /// * `Err(VerificationError::LockTimeout)` - lock wait limit elapsed
    /// * `Err(VerificationError::Storage)` - any other storage fault
    async fn lock_for_update(&self, id: Uuid)
        -> Result<Box<dyn AccountLease>, VerificationError>;
}

/// Exclusive, transaction-scoped access to a single account record.
///
/// Dropping a lease without committing rolls the unit back and releases the
/// row lock, so `?`-propagated errors can never leave partial state behind.
#[async_trait]
pub trait AccountLease: Send {
    /// The record as read under the lock
    fn account(&self) -> &Account;

    /// Apply the patch and commit the transactional unit
    ///
    /// # Returns
    /// * `Ok(Account)` - the updated record as persisted
    /// * `Err(VerificationError)` - the unit is rolled back; the stored
    ///   record is unchanged
    async fn commit(self: Box<Self>, patch: AccountPatch) -> Result<Account, VerificationError>;

    /// Roll the unit back explicitly, persisting nothing
    async fn rollback(self: Box<Self>);
}
