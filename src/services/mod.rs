//! Business services containing the verification logic.

pub mod otp;

// Re-export commonly used types
pub use otp::{
    CounterCheck, OtpCodec, OtpSubmission, OtpVerifier, TimeCheck, VerificationRequest,
    VerifyOptions,
};
