//! Postgres-backed audit sink.

use async_trait::async_trait;
use garrison_audit::{ApiLogRecord, AuditSink, SinkError};
use sqlx::PgPool;

/// Sink appending each record as a single independent insert.
#[derive(Clone)]
pub struct PgAuditSink {
    pool: PgPool,
}

impl PgAuditSink {
    /// Create a sink over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the audit table if it does not exist yet. Schema evolution
    /// beyond this is out of scope.
    pub async fn ensure_schema(&self) -> Result<(), SinkError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS api_log (
                id UUID PRIMARY KEY,
                logged_at TIMESTAMPTZ NOT NULL,
                user_id UUID,
                username TEXT,
                endpoint TEXT NOT NULL,
                method TEXT NOT NULL,
                status_code INT NOT NULL,
                request_body TEXT NOT NULL,
                response_body TEXT NOT NULL,
                ip_address TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| SinkError::Store(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl AuditSink for PgAuditSink {
    async fn append(&self, record: ApiLogRecord) -> Result<(), SinkError> {
        sqlx::query(
            r#"
            INSERT INTO api_log (
                id, logged_at, user_id, username, endpoint, method,
                status_code, request_body, response_body, ip_address
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.timestamp)
        .bind(record.user.map(|u| u.as_uuid()))
        .bind(record.username)
        .bind(record.endpoint)
        .bind(record.method)
        .bind(record.status_code as i32)
        .bind(record.request_body)
        .bind(record.response_body)
        .bind(record.ip_address)
        .execute(&self.pool)
        .await
        .map_err(|e| SinkError::Store(e.to_string()))?;

        Ok(())
    }
}
