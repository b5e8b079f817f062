//! # OTP Verifier
//!
//! Second-factor one-time-password verification for a login flow. This crate
//! contains the verify-and-advance protocol for counter-based codes (HOTP)
//! and the stateless check for time-based codes (TOTP), together with the
//! collaborator interfaces it is wired to: an account record store, an OTP
//! codec, and an audit sink.
//!
//! The crate owns no storage, cryptography, or transport of its own. Real
//! codec and persistence implementations live in the surrounding service;
//! in-memory implementations are provided for tests and local wiring.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::account::{Account, SanitizedAccount};
pub use domain::entities::audit::{AuditEntry, AuditLevel};
pub use errors::{VerificationError, VerificationResult};
pub use repositories::account::{AccountLease, AccountPatch, AccountStore, MockAccountStore};
pub use repositories::audit::{AuditSink, MockAuditSink, NoOpAuditSink};
pub use services::otp::{
    CounterCheck, OtpCodec, OtpSubmission, OtpVerifier, TimeCheck, VerificationRequest,
    VerifyOptions,
};
