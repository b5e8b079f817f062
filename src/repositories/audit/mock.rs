//! Recording implementation of AuditSink for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::audit::AuditEntry;
use crate::errors::VerificationError;

use super::AuditSink;

/// Mock audit sink that records every entry for assertions
pub struct MockAuditSink {
    entries: Arc<Mutex<Vec<AuditEntry>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockAuditSink {
    /// Create a new mock sink
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Set whether recording should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// Get all recorded entries for testing
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Clear all recorded entries
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

impl Default for MockAuditSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditSink for MockAuditSink {
    async fn record(&self, entry: &AuditEntry) -> Result<(), VerificationError> {
        if *self.should_fail.lock().unwrap() {
            return Err(VerificationError::Storage {
                message: "mock audit sink error".to_string(),
            });
        }

        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }
}
