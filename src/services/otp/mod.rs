//! OTP verification service module
//!
//! This module provides the second-factor verify-and-advance workflow:
//! - HOTP verification with windowed counter matching and atomic,
//!   strictly-monotonic counter advancement under a row lock
//! - TOTP verification against the current time window, with no persisted
//!   state
//! - Generic denial shaping with precise reasons kept in the audit trail

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::{
    VerifyOptions, DEFAULT_HOTP_WINDOW, DEFAULT_INTERVAL_SECONDS, DEFAULT_TOKEN_LENGTH,
    DEFAULT_TOTP_WINDOW,
};
pub use service::OtpVerifier;
pub use traits::{CounterCheck, OtpCodec, TimeCheck};
pub use types::{OtpSubmission, VerificationRequest};
