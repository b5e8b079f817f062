//! In-memory implementation of AccountStore for testing.
//!
//! Row exclusivity is real here: each account gets its own async mutex, so
//! concurrent lock holders genuinely serialize and race tests exercise the
//! same interleavings a database row lock would produce.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::VerificationError;

use super::r#trait::{AccountLease, AccountPatch, AccountStore};

/// Mock account store for testing
pub struct MockAccountStore {
    accounts: Arc<Mutex<HashMap<Uuid, Account>>>,
    row_locks: Arc<Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>>,
    fail_commits: Arc<Mutex<bool>>,
}

impl MockAccountStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(HashMap::new())),
            row_locks: Arc::new(Mutex::new(HashMap::new())),
            fail_commits: Arc::new(Mutex::new(false)),
        }
    }

    /// Seed the store with an account
    pub fn insert(&self, account: Account) {
        self.accounts.lock().unwrap().insert(account.id, account);
    }

    /// Make every subsequent commit fail with a storage error
    pub fn set_fail_commits(&self, fail: bool) {
        *self.fail_commits.lock().unwrap() = fail;
    }

    /// Stored counter for an account, for assertions
    pub fn stored_counter(&self, id: Uuid) -> Option<u64> {
        self.accounts
            .lock()
            .unwrap()
            .get(&id)
            .map(|a| a.otp_last_counter)
    }

    fn row_lock(&self, id: Uuid) -> Arc<AsyncMutex<()>> {
        let mut locks = self.row_locks.lock().unwrap();
        Arc::clone(locks.entry(id).or_insert_with(|| Arc::new(AsyncMutex::new(()))))
    }
}

impl Default for MockAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, VerificationError> {
        Ok(self.accounts.lock().unwrap().get(&id).cloned())
    }

    async fn lock_for_update(
        &self,
        id: Uuid,
    ) -> Result<Box<dyn AccountLease>, VerificationError> {
        let guard = self.row_lock(id).lock_owned().await;

        // Read under the lock; a missing row fails the unit and the guard
        // drop releases the lock immediately.
        let account = self
            .accounts
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(VerificationError::AccountNotFound)?;

        Ok(Box::new(MockAccountLease {
            account,
            accounts: Arc::clone(&self.accounts),
            fail_commits: Arc::clone(&self.fail_commits),
            _guard: guard,
        }))
    }
}

struct MockAccountLease {
    account: Account,
    accounts: Arc<Mutex<HashMap<Uuid, Account>>>,
    fail_commits: Arc<Mutex<bool>>,
    _guard: OwnedMutexGuard<()>,
}

#[async_trait]
impl AccountLease for MockAccountLease {
    fn account(&self) -> &Account {
        &self.account
    }

    async fn commit(self: Box<Self>, patch: AccountPatch) -> Result<Account, VerificationError> {
        if *self.fail_commits.lock().unwrap() {
            return Err(VerificationError::Storage {
                message: "mock store commit failure".to_string(),
            });
        }

        let mut accounts = self.accounts.lock().unwrap();
        let stored = accounts
            .get_mut(&self.account.id)
            .ok_or_else(|| VerificationError::Storage {
                message: "account removed while leased".to_string(),
            })?;

        if let Some(counter) = patch.otp_last_counter {
            stored.advance_counter(counter)?;
        }

        Ok(stored.clone())
    }

    async fn rollback(self: Box<Self>) {
        // Nothing was written; dropping self releases the row lock.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_lock_for_update_unknown_account() {
        let store = MockAccountStore::new();
        match store.lock_for_update(Uuid::new_v4()).await {
            Ok(_) => panic!("lease granted for an unknown account"),
            Err(err) => assert!(matches!(err, VerificationError::AccountNotFound)),
        }
    }

    #[tokio::test]
    async fn test_commit_persists_patch() {
        let store = MockAccountStore::new();
        let account = Account::new(b"secret".to_vec());
        let id = account.id;
        store.insert(account);

        let lease = store.lock_for_update(id).await.unwrap();
        let updated = lease
            .commit(AccountPatch {
                otp_last_counter: Some(9),
            })
            .await
            .unwrap();

        assert_eq!(updated.otp_last_counter, 9);
        assert_eq!(store.stored_counter(id), Some(9));
    }

    #[tokio::test]
    async fn test_failed_commit_leaves_record_unchanged() {
        let store = MockAccountStore::new();
        let mut account = Account::new(b"secret".to_vec());
        account.otp_last_counter = 5;
        let id = account.id;
        store.insert(account);

        store.set_fail_commits(true);
        let lease = store.lock_for_update(id).await.unwrap();
        let err = lease
            .commit(AccountPatch {
                otp_last_counter: Some(7),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, VerificationError::Storage { .. }));
        assert_eq!(store.stored_counter(id), Some(5));
    }

    #[tokio::test]
    async fn test_lease_serializes_concurrent_access() {
        let store = MockAccountStore::new();
        let account = Account::new(b"secret".to_vec());
        let id = account.id;
        store.insert(account);

        let first = store.lock_for_update(id).await.unwrap();

        // A second lease must block until the first one ends.
        let blocked =
            tokio::time::timeout(Duration::from_millis(50), store.lock_for_update(id)).await;
        assert!(blocked.is_err());

        first.rollback().await;

        let second =
            tokio::time::timeout(Duration::from_millis(50), store.lock_for_update(id)).await;
        assert!(second.is_ok());
    }
}
