//! Database-backed audit persistence.

pub mod audit_sink;
pub mod pool;

pub use audit_sink::PgAuditSink;
pub use pool::{create_pool, verify_connection};
