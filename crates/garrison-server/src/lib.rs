//! Garrison API Server
//!
//! HTTP backend for the Garrison asset-management platform. Built on
//! Axum in a layered architecture:
//!
//! - **Routes**: HTTP endpoint definitions
//! - **Handlers**: Request processing and object-level authorization
//! - **Middleware**: Authentication and audit logging
//! - **Store/Directory**: Already-loaded domain records and accounts

#![warn(clippy::all)]

pub mod config;
pub mod db;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use directory::Directory;
use garrison_audit::{AuditRecorder, AuditSink, MemorySink, RecorderConfig, RecorderHandle};
use std::net::SocketAddr;
use std::sync::Arc;
use store::Store;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Server builder for constructing and running the API server.
pub struct Server {
    config: ServerConfig,
    state: AppState,
    audit_writer: RecorderHandle,
}

impl Server {
    /// Create a new server with the given configuration.
    ///
    /// Picks the audit sink from the configuration: Postgres when a
    /// database URL is set, the in-memory sink otherwise.
    pub async fn new(config: ServerConfig) -> Result<Self, anyhow::Error> {
        let sink: Arc<dyn AuditSink> = match &config.audit.database_url {
            Some(url) => {
                let pool = db::create_pool(url).await?;
                let sink = db::PgAuditSink::new(pool);
                sink.ensure_schema().await?;
                Arc::new(sink)
            }
            None => {
                info!("No audit database configured, using in-memory sink");
                Arc::new(MemorySink::new())
            }
        };

        let (recorder, audit_writer) = AuditRecorder::spawn(
            RecorderConfig {
                buffer_size: config.audit.buffer_size,
            },
            sink,
        );

        let state = AppState::new(config.clone(), Directory::new(), Store::new(), recorder);

        Ok(Self {
            config,
            state,
            audit_writer,
        })
    }

    /// Shared application state, for provisioning and seeding.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the router with all routes and middleware.
    pub fn router(&self) -> axum::Router {
        routes::create_router(self.state.clone()).layer(TraceLayer::new_for_http())
    }

    /// Run the server, binding to the configured address.
    pub async fn run(self) -> Result<(), anyhow::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr).await?;

        info!("Server listening on {}", addr);

        axum::serve(
            listener,
            self.router()
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        // Let the audit writer drain what the handlers queued.
        let Self {
            state, audit_writer, ..
        } = self;
        drop(state);
        audit_writer.join().await;

        Ok(())
    }

    /// Get the server's socket address.
    pub fn addr(&self) -> SocketAddr {
        self.config.socket_addr()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
