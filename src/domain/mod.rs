//! Domain layer containing the entities owned or shaped by the verifier.

pub mod entities;

pub use entities::{Account, AuditEntry, AuditLevel, SanitizedAccount};
