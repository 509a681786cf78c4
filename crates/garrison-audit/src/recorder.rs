//! Non-blocking recorder over a bounded channel.

use crate::{ApiLogRecord, AuditSink};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

/// Configuration for the recorder.
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Maximum records buffered before new ones are dropped.
    pub buffer_size: usize,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self { buffer_size: 10_000 }
    }
}

/// Handle for submitting audit records.
#[derive(Clone)]
pub struct AuditRecorder {
    sender: mpsc::Sender<ApiLogRecord>,
}

/// The writer side: a spawned task draining records into a sink.
pub struct RecorderHandle {
    task: JoinHandle<()>,
}

impl AuditRecorder {
    /// Create a recorder and spawn its writer task over `sink`.
    pub fn spawn(config: RecorderConfig, sink: Arc<dyn AuditSink>) -> (Self, RecorderHandle) {
        let (sender, mut receiver) = mpsc::channel::<ApiLogRecord>(config.buffer_size);

        let task = tokio::spawn(async move {
            while let Some(record) = receiver.recv().await {
                // Sink failures never propagate; the request that produced
                // this record has already completed.
                if let Err(e) = sink.append(record).await {
                    error!(error = %e, "Failed to persist audit record");
                }
            }
            debug!("Audit writer draining complete");
        });

        (Self { sender }, RecorderHandle { task })
    }

    /// Record one API call (non-blocking).
    pub fn record(&self, record: ApiLogRecord) {
        match self.sender.try_send(record) {
            Ok(()) => debug!("Audit record queued"),
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!("Audit buffer full, dropping record");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                error!("Audit channel closed, dropping record");
            }
        }
    }

    /// Whether the writer is still accepting records.
    pub fn is_healthy(&self) -> bool {
        !self.sender.is_closed()
    }
}

impl RecorderHandle {
    /// Wait for the writer to drain. Call after dropping every
    /// [`AuditRecorder`] clone.
    pub async fn join(self) {
        if let Err(e) = self.task.await {
            error!(error = %e, "Audit writer task failed");
        }
    }

    /// Abort the writer without draining.
    pub fn abort(&self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemorySink, SinkError};
    use async_trait::async_trait;

    fn sample(endpoint: &str) -> ApiLogRecord {
        ApiLogRecord::new(None, endpoint, "GET", 200, "", "", "127.0.0.1")
    }

    #[tokio::test]
    async fn test_records_reach_sink() {
        let sink = MemorySink::new();
        let (recorder, handle) =
            AuditRecorder::spawn(RecorderConfig::default(), Arc::new(sink.clone()));

        recorder.record(sample("/api/v1/bases"));
        recorder.record(sample("/api/v1/inventory"));

        drop(recorder);
        handle.join().await;

        assert_eq!(sink.len(), 2);
    }

    struct FailingSink;

    #[async_trait]
    impl AuditSink for FailingSink {
        async fn append(&self, _record: ApiLogRecord) -> Result<(), SinkError> {
            Err(SinkError::Store("disk on fire".into()))
        }
    }

    #[tokio::test]
    async fn test_sink_failure_is_swallowed() {
        let (recorder, handle) =
            AuditRecorder::spawn(RecorderConfig::default(), Arc::new(FailingSink));

        recorder.record(sample("/api/v1/transfers"));
        assert!(recorder.is_healthy());

        drop(recorder);
        // Writer exits cleanly despite every append failing.
        handle.join().await;
    }

    #[tokio::test]
    async fn test_full_buffer_drops_instead_of_blocking() {
        struct StuckSink;

        #[async_trait]
        impl AuditSink for StuckSink {
            async fn append(&self, _record: ApiLogRecord) -> Result<(), SinkError> {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }

        let (recorder, handle) =
            AuditRecorder::spawn(RecorderConfig { buffer_size: 1 }, Arc::new(StuckSink));

        // First record is taken by the writer, the rest fill and overflow
        // the one-slot buffer. None of these calls may block.
        for _ in 0..10 {
            recorder.record(sample("/api/v1/expenditures"));
        }

        handle.abort();
    }
}
