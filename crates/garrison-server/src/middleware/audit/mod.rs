//! Audit logging middleware.

pub mod layer;

pub use layer::{AuditLayer, AuditMiddleware};
