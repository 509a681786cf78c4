//! Route configuration for the Garrison API server.

mod internal;
mod v1;

use crate::{
    error::ApiError,
    middleware::{AuditLayer, AuthLayer},
    state::AppState,
};
use axum::Router;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Common middleware stack applied to all routes
    let common_middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CatchPanicLayer::new())
        .layer(RequestBodyLimitLayer::new(state.config.server.body_limit_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.server.request_timeout_secs,
        )));

    Router::new()
        // API routes
        .nest("/api/v1", v1::router())
        // Internal routes (health, readiness)
        .nest("/internal", internal::router())
        // Fallback for unmatched routes
        .fallback(fallback_handler)
        // Audit sits inside auth so it sees the resolved principal
        .layer(AuditLayer::new(
            state.recorder.clone(),
            state.config.audit.api_prefix.clone(),
        ))
        .layer(AuthLayer::new(state.directory.clone()))
        // Apply common middleware
        .layer(common_middleware)
        // Attach state
        .with_state(state)
}

async fn fallback_handler() -> ApiError {
    ApiError::NotFound("Route".into())
}
