//! API call audit log for Garrison.
//!
//! One immutable [`ApiLogRecord`] is produced per API request. Records are
//! handed to a cloneable [`AuditRecorder`] over a bounded channel and
//! drained by a writer task into an [`AuditSink`]. Recording is
//! fire-and-forget: a full buffer or a failing sink is reported on the
//! operational log and never touches the request/response cycle.

mod record;
mod recorder;
mod sink;

pub use record::{truncate_body, ApiLogRecord, MAX_BODY_CHARS};
pub use recorder::{AuditRecorder, RecorderConfig, RecorderHandle};
pub use sink::{AuditSink, MemorySink, SinkError};
