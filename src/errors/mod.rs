//! Error types for OTP verification.
//!
//! Every failure kind converges to one generic denial message at the caller
//! boundary; the precise kind is preserved only in the audit trail and in
//! tracing output.

use thiserror::Error;

/// Generic caller-facing denial text, deliberately non-enumerable so a
/// response never reveals whether the account exists or why the code failed.
pub const DENIAL_MESSAGE: &str = "invalid credentials";

/// Internal outcome of a verification attempt
#[derive(Error, Debug)]
pub enum VerificationError {
    /// The code did not match any counter or time-step in the window.
    /// Recoverable by the caller (a fresh code may be tried); never retried
    /// internally.
    #[error("invalid one-time password")]
    InvalidOtp,

    /// The codec reported a matched counter that does not strictly exceed
    /// the stored counter. Unreachable with a correct forward-only window,
    /// but enforced as an independent guard and never silently ignored.
    #[error("matched counter does not advance the stored counter")]
    InvalidAccountState,

    /// The identifier does not resolve to an account record
    #[error("account not found")]
    AccountNotFound,

    /// Transaction, lock acquisition, or update failed at the storage layer.
    /// The transactional unit is rolled back; no partial state persists.
    #[error("storage failure: {message}")]
    Storage { message: String },

    /// Timed out waiting for the account row lock. Distinguishable from a
    /// verification failure so callers do not treat contention as a bad code.
    #[error("timed out waiting for the account lock")]
    LockTimeout,
}

impl VerificationError {
    /// The generic message handed to the end caller, identical for every
    /// variant. Storage detail in particular is never exposed here.
    pub fn denial_message(&self) -> &'static str {
        DENIAL_MESSAGE
    }

    /// Whether the caller can sensibly retry with a new code
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidOtp)
    }
}

pub type VerificationResult<T> = Result<T, VerificationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denial_message_is_uniform() {
        let errors = [
            VerificationError::InvalidOtp,
            VerificationError::InvalidAccountState,
            VerificationError::AccountNotFound,
            VerificationError::Storage {
                message: "connection reset".to_string(),
            },
            VerificationError::LockTimeout,
        ];

        for error in &errors {
            assert_eq!(error.denial_message(), DENIAL_MESSAGE);
        }
    }

    #[test]
    fn test_storage_detail_never_in_denial() {
        let error = VerificationError::Storage {
            message: "mysql: deadlock on row 42".to_string(),
        };
        assert!(!error.denial_message().contains("mysql"));
    }

    #[test]
    fn test_only_invalid_otp_is_recoverable() {
        assert!(VerificationError::InvalidOtp.is_recoverable());
        assert!(!VerificationError::InvalidAccountState.is_recoverable());
        assert!(!VerificationError::AccountNotFound.is_recoverable());
        assert!(!VerificationError::LockTimeout.is_recoverable());
    }
}
