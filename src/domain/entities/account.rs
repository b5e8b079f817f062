//! Account entity holding the per-user OTP verification state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::VerificationError;

/// Account record as seen by the OTP verifier.
///
/// The verifier only ever reads `otp_secret` and conditionally writes
/// `otp_last_counter`; everything else about the account is owned by the
/// surrounding service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Shared OTP secret. Immutable outside provisioning and never serialized.
    #[serde(skip_serializing, default)]
    pub otp_secret: Vec<u8>,

    /// Highest HOTP counter ever accepted for this account.
    /// Monotonically non-decreasing, server-authoritative.
    pub otp_last_counter: u64,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account with a fresh counter
    pub fn new(otp_secret: Vec<u8>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            otp_secret,
            otp_last_counter: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Advances the stored counter to `counter`.
    ///
    /// The counter must strictly increase; anything else fails with
    /// [`VerificationError::InvalidAccountState`] and leaves the account
    /// untouched. This is the entity-level half of the no-replay invariant.
    pub fn advance_counter(&mut self, counter: u64) -> Result<(), VerificationError> {
        if counter <= self.otp_last_counter {
            return Err(VerificationError::InvalidAccountState);
        }
        self.otp_last_counter = counter;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Returns a secret-free view of this account, safe to hand to callers
    pub fn sanitized(&self) -> SanitizedAccount {
        SanitizedAccount {
            id: self.id,
            otp_last_counter: self.otp_last_counter,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Secret-free view of an [`Account`], returned on every successful
/// verification. The OTP secret is excluded at the type level so it cannot
/// leak past the verifier boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedAccount {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Highest HOTP counter ever accepted for this account
    pub otp_last_counter: u64,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl From<&Account> for SanitizedAccount {
    fn from(account: &Account) -> Self {
        account.sanitized()
    }
}
