//! Audit sink trait defining the interface for audit event persistence.

use async_trait::async_trait;

use crate::domain::entities::audit::AuditEntry;
use crate::errors::VerificationError;

/// Sink trait for structured verification audit events
///
/// Injected into the verifier as an explicit dependency rather than reached
/// through a process-wide logger, so tests can substitute a recording stub.
/// A failing sink never changes the outcome of a verification attempt.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Record a single audit entry
    ///
    /// # Returns
    /// * `Ok(())` on successful recording
    /// * `Err(VerificationError)` if the sink fails; the verifier logs and
    ///   discards this error
    async fn record(&self, entry: &AuditEntry) -> Result<(), VerificationError>;
}
