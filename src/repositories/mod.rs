//! Repository interfaces consumed by the verifier, plus in-memory
//! implementations for tests and local wiring.

pub mod account;
pub mod audit;

pub use account::{AccountLease, AccountPatch, AccountStore, MockAccountStore};
pub use audit::{AuditSink, MockAuditSink, NoOpAuditSink};
