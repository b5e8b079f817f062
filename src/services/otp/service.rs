//! Main OTP verification service implementation

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::account::SanitizedAccount;
use crate::domain::entities::audit::AuditEntry;
use crate::errors::{VerificationError, VerificationResult};
use crate::repositories::account::{AccountPatch, AccountStore};
use crate::repositories::audit::AuditSink;

use super::config::VerifyOptions;
use super::traits::{CounterCheck, OtpCodec, TimeCheck};
use super::types::{OtpSubmission, VerificationRequest};

/// Verification service for second-factor one-time passwords.
///
/// The HOTP path executes as one transactional unit against the account
/// store: lock the row, test the candidate code against the forward window
/// above the stored counter, and persist the matched counter iff it strictly
/// advances the stored value. The row lock is the sole concurrency-control
/// mechanism; a concurrent attempt for the same account blocks until the
/// first unit commits or rolls back and then re-runs its own window test
/// against the advanced counter.
///
/// The TOTP path is a plain read plus a time-window check; it persists
/// nothing, so a code stays valid for every request within its window. That
/// replay window is a documented property of this design, not something this
/// service tries to patch.
pub struct OtpVerifier<S: AccountStore, C: OtpCodec> {
    /// Account record store
    store: Arc<S>,
    /// External codec that matches codes to counters or time-steps
    codec: Arc<C>,
    /// Sink receiving the precise outcome of every attempt
    audit: Arc<dyn AuditSink>,
}

impl<S: AccountStore, C: OtpCodec> OtpVerifier<S, C> {
    /// Create a new verifier
    ///
    /// # Arguments
    ///
    /// * `store` - account store implementation
    /// * `codec` - OTP codec implementation
    /// * `audit` - audit sink for structured success/failure events
    pub fn new(store: Arc<S>, codec: Arc<C>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            store,
            codec,
            audit,
        }
    }

    /// Verify a claimed code for an identified account
    ///
    /// Dispatches exhaustively over the submission variant; the other path
    /// is never attempted.
    ///
    /// # Returns
    ///
    /// * `Ok(SanitizedAccount)` - the code was accepted; the account view
    ///   carries no secret material
    /// * `Err(VerificationError)` - the precise internal reason; callers
    ///   should expose only [`denial_message`](VerificationError::denial_message)
    pub async fn verify(
        &self,
        request: &VerificationRequest,
        options: &VerifyOptions,
    ) -> VerificationResult<SanitizedAccount> {
        match &request.submission {
            OtpSubmission::Hotp(code) => {
                self.verify_hotp(request.account_id, code, options).await
            }
            OtpSubmission::Totp(code) => {
                self.verify_totp(request.account_id, code, options).await
            }
        }
    }

    /// Verify a counter-based code and advance the stored counter
    ///
    /// This method executes as one atomic unit:
    /// 1. Lock the account row for update
    /// 2. Test the code against counters `[last + 1, last + window]`
    /// 3. On a match that strictly advances the counter, persist the new
    ///    counter inside the same unit and commit
    ///
    /// Any failure rolls the whole unit back; a partially advanced counter
    /// is never observable.
    pub async fn verify_hotp(
        &self,
        account_id: Uuid,
        code: &str,
        options: &VerifyOptions,
    ) -> VerificationResult<SanitizedAccount> {
        let lease = match self.store.lock_for_update(account_id).await {
            Ok(lease) => lease,
            Err(error) => return Err(self.reject(account_id, "hotp", error).await),
        };

        let last = lease.account().otp_last_counter;
        let check = CounterCheck {
            last,
            window: options.hotp_window(),
            token_length: options.token_length,
        };

        match self
            .codec
            .check_counter_code(code, &lease.account().otp_secret, &check)
        {
            None => {
                lease.rollback().await;
                Err(self
                    .reject(account_id, "hotp", VerificationError::InvalidOtp)
                    .await)
            }
            // Second, independent guard: the window starts at last + 1, so a
            // non-advancing match means the codec misbehaved. Never accepted.
            Some(counter) if counter <= last => {
                lease.rollback().await;
                Err(self
                    .reject(account_id, "hotp", VerificationError::InvalidAccountState)
                    .await)
            }
            Some(counter) => {
                let updated = match lease
                    .commit(AccountPatch {
                        otp_last_counter: Some(counter),
                    })
                    .await
                {
                    Ok(account) => account,
                    Err(error) => return Err(self.reject(account_id, "hotp", error).await),
                };

                tracing::info!(
                    account_id = %account_id,
                    counter = counter,
                    event = "otp_verified",
                    "HOTP code accepted, counter advanced"
                );
                self.record_audit(AuditEntry::info(
                    account_id,
                    format!("HOTP code accepted at counter {}", counter),
                ))
                .await;

                Ok(updated.sanitized())
            }
        }
    }

    /// Verify a time-based code against the current clock
    pub async fn verify_totp(
        &self,
        account_id: Uuid,
        code: &str,
        options: &VerifyOptions,
    ) -> VerificationResult<SanitizedAccount> {
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
        self.verify_totp_at(account_id, code, options, now).await
    }

    /// Verify a time-based code at a caller-supplied timestamp
    ///
    /// The public path pins `timestamp` to the current time; this seam
    /// exists so the window boundaries can be tested deterministically.
    pub async fn verify_totp_at(
        &self,
        account_id: Uuid,
        code: &str,
        options: &VerifyOptions,
        timestamp: u64,
    ) -> VerificationResult<SanitizedAccount> {
        // Plain read: there is no mutable counter to protect on this path.
        let account = match self.store.find_by_id(account_id).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                return Err(self
                    .reject(account_id, "totp", VerificationError::AccountNotFound)
                    .await)
            }
            Err(error) => return Err(self.reject(account_id, "totp", error).await),
        };

        let check = TimeCheck {
            timestamp,
            window: options.totp_window(),
            interval_seconds: options.interval_seconds,
            token_length: options.token_length,
        };

        match self
            .codec
            .check_time_code(code, &account.otp_secret, &check)
        {
            None => Err(self
                .reject(account_id, "totp", VerificationError::InvalidOtp)
                .await),
            Some(step) => {
                tracing::info!(
                    account_id = %account_id,
                    step = step,
                    event = "otp_verified",
                    "TOTP code accepted"
                );
                self.record_audit(AuditEntry::info(
                    account_id,
                    format!("TOTP code accepted at step {}", step),
                ))
                .await;

                Ok(account.sanitized())
            }
        }
    }

    /// Audit and log a failed attempt, then hand the error back
    async fn reject(
        &self,
        account_id: Uuid,
        method: &'static str,
        error: VerificationError,
    ) -> VerificationError {
        match &error {
            VerificationError::Storage { .. } | VerificationError::LockTimeout => {
                tracing::error!(
                    account_id = %account_id,
                    method = method,
                    error = %error,
                    event = "otp_store_failure",
                    "Verification aborted by storage layer"
                );
            }
            _ => {
                tracing::warn!(
                    account_id = %account_id,
                    method = method,
                    error = %error,
                    event = "otp_rejected",
                    "Verification attempt rejected"
                );
            }
        }

        self.record_audit(AuditEntry::warn(
            account_id,
            format!("{} verification failed: {}", method, error),
        ))
        .await;

        error
    }

    /// Record an audit entry; a failing sink never changes the outcome
    async fn record_audit(&self, entry: AuditEntry) {
        if let Err(error) = self.audit.record(&entry).await {
            tracing::error!(
                user_id = %entry.user_id,
                error = %error,
                event = "audit_sink_failure",
                "Failed to record audit entry"
            );
        }
    }
}
