//! Audit entry entity for recording verification outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of an audit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditLevel {
    /// Successful verification
    Info,
    /// Rejected or failed verification
    Warn,
}

impl AuditLevel {
    /// String representation for sinks that store levels as text
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }
}

/// A single structured audit event.
///
/// Carries the precise internal outcome of a verification attempt. The
/// caller-facing error is always generic; this entry is the only place the
/// real reason is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Account the attempt was made against
    pub user_id: Uuid,

    /// Severity of the event
    pub level: AuditLevel,

    /// Human-readable description of the outcome
    pub message: String,

    /// Timestamp when the entry was created
    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Creates an info-level entry for a successful verification
    pub fn info(user_id: Uuid, message: impl Into<String>) -> Self {
        Self::new(user_id, AuditLevel::Info, message)
    }

    /// Creates a warn-level entry for a rejected or failed verification
    pub fn warn(user_id: Uuid, message: impl Into<String>) -> Self {
        Self::new(user_id, AuditLevel::Warn, message)
    }

    fn new(user_id: Uuid, level: AuditLevel, message: impl Into<String>) -> Self {
        Self {
            user_id,
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}
