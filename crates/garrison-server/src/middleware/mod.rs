//! Middleware for the Garrison API server.

pub mod audit;
pub mod auth;

pub use audit::{AuditLayer, AuditMiddleware};
pub use auth::{Auth, AuthLayer, AuthMiddleware};
