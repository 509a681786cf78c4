//! Authentication middleware layer.
//!
//! Resolves the bearer token through the identity directory and inserts
//! the [`Principal`] into request extensions. A missing or unknown token
//! leaves the request anonymous; handlers that need a caller reject
//! through the [`Auth`](super::Auth) extractor.

use crate::directory::Directory;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
};
use garrison_core::Principal;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Authentication layer configuration.
#[derive(Clone)]
pub struct AuthLayer {
    directory: Directory,
}

impl AuthLayer {
    /// Create new auth layer over the given directory.
    pub fn new(directory: Directory) -> Self {
        Self { directory }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            directory: self.directory.clone(),
        }
    }
}

/// Authentication middleware service.
#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    directory: Directory,
}

impl<S> Service<Request<Body>> for AuthMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let directory = self.directory.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            if let Some(token) = extract_token(&req) {
                if let Some(principal) = directory.resolve(&token) {
                    req.extensions_mut().insert::<Principal>(principal);
                }
            }

            inner.call(req).await
        })
    }
}

fn extract_token(req: &Request<Body>) -> Option<String> {
    let auth_header = req.headers().get(header::AUTHORIZATION)?;
    let auth_str = auth_header.to_str().ok()?;
    auth_str.strip_prefix("Bearer ").map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    #[test]
    fn test_extract_token_from_bearer_header() {
        let req = Request::builder()
            .header("Authorization", "Bearer tok-admin")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_token(&req).as_deref(), Some("tok-admin"));
    }

    #[test]
    fn test_extract_token_missing() {
        let req = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(extract_token(&req), None);
    }

    #[test]
    fn test_extract_token_wrong_scheme() {
        let req = Request::builder()
            .header("Authorization", "Basic abc123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract_token(&req), None);
    }
}
