//! Error handling for the Garrison API server.

pub mod response;
pub mod types;

pub use types::{ApiError, ApiResult};
