//! Domain entities for OTP verification.

pub mod account;
pub mod audit;

pub use account::{Account, SanitizedAccount};
pub use audit::{AuditEntry, AuditLevel};
