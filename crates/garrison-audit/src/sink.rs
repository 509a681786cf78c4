//! Where audit records end up.

use crate::ApiLogRecord;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Error appending a record to a sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The backing store rejected the write.
    #[error("audit store write failed: {0}")]
    Store(String),
    /// The sink is no longer accepting records.
    #[error("audit sink closed")]
    Closed,
}

/// Destination for audit records.
///
/// Each append is a single independent insert; no ordering is guaranteed
/// across records. Implementations must not panic on failure: errors are
/// reported to the caller, which logs and drops them.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Persist one record.
    async fn append(&self, record: ApiLogRecord) -> Result<(), SinkError>;
}

/// In-memory sink used by tests and the dev profile.
#[derive(Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<ApiLogRecord>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far.
    pub fn records(&self) -> Vec<ApiLogRecord> {
        self.records.lock().clone()
    }

    /// Number of records appended.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[async_trait]
impl AuditSink for MemorySink {
    async fn append(&self, record: ApiLogRecord) -> Result<(), SinkError> {
        self.records.lock().push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_sink_appends() {
        let sink = MemorySink::new();
        let record =
            ApiLogRecord::new(None, "/api/v1/bases", "GET", 200, "", "[]", "127.0.0.1");
        sink.append(record.clone()).await.unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.records()[0].endpoint, "/api/v1/bases");
    }
}
