//! Authentication middleware: bearer token to principal.

pub mod extractor;
pub mod layer;

pub use extractor::Auth;
pub use layer::{AuthLayer, AuthMiddleware};
