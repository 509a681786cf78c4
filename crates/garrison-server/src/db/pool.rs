//! Database pool management.

use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::info;

/// Create a database connection pool for the audit sink.
pub async fn create_pool(url: &str) -> Result<PgPool> {
    info!("Creating audit database pool...");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(url)
        .await
        .context("Failed to create audit database pool")?;

    verify_connection(&pool).await?;

    Ok(pool)
}

/// Verify database connection.
pub async fn verify_connection(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .fetch_one(pool)
        .await
        .context("Database connection verification failed")?;

    info!("Audit database connection verified");
    Ok(())
}
