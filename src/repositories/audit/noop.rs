//! No-op implementation of AuditSink for when audit recording is not needed

use async_trait::async_trait;

use crate::domain::entities::audit::AuditEntry;
use crate::errors::VerificationError;

use super::AuditSink;

/// No-op implementation of AuditSink
pub struct NoOpAuditSink;

impl NoOpAuditSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpAuditSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditSink for NoOpAuditSink {
    async fn record(&self, _entry: &AuditEntry) -> Result<(), VerificationError> {
        Ok(())
    }
}

// Also implement for () to allow simple type defaults
#[async_trait]
impl AuditSink for () {
    async fn record(&self, _entry: &AuditEntry) -> Result<(), VerificationError> {
        Ok(())
    }
}
