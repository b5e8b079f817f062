//! Request types for the verification service

use uuid::Uuid;

/// A claimed code for exactly one verification method.
///
/// The two methods are mutually exclusive by construction; dispatch over
/// this enum is exhaustive, so there is no "neither" or "both" state to
/// defend against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpSubmission {
    /// Counter-based code
    Hotp(String),
    /// Time-based code
    Totp(String),
}

/// A single verification attempt against an identified account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    /// Account the code is claimed for
    pub account_id: Uuid,
    /// The claimed code and its method
    pub submission: OtpSubmission,
}

impl VerificationRequest {
    /// Build an HOTP verification request
    pub fn hotp(account_id: Uuid, code: impl Into<String>) -> Self {
        Self {
            account_id,
            submission: OtpSubmission::Hotp(code.into()),
        }
    }

    /// Build a TOTP verification request
    pub fn totp(account_id: Uuid, code: impl Into<String>) -> Self {
        Self {
            account_id,
            submission: OtpSubmission::Totp(code.into()),
        }
    }
}
