//! Request auditing middleware.
//!
//! Produces one [`ApiLogRecord`] per request under the API prefix and
//! hands it to the recorder after the inner service has run. Recording is
//! strictly an observer: it never alters the response and its failures
//! never fail the request.

use axum::{
    body::{to_bytes, Body},
    extract::ConnectInfo,
    http::{Method, Request},
    response::Response,
};
use futures::future::BoxFuture;
use garrison_audit::{ApiLogRecord, AuditRecorder};
use garrison_core::Principal;
use std::net::SocketAddr;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Audit layer configuration.
#[derive(Clone)]
pub struct AuditLayer {
    recorder: AuditRecorder,
    api_prefix: String,
}

impl AuditLayer {
    /// Create a layer recording requests under `api_prefix`.
    pub fn new(recorder: AuditRecorder, api_prefix: impl Into<String>) -> Self {
        Self {
            recorder,
            api_prefix: api_prefix.into(),
        }
    }
}

impl<S> Layer<S> for AuditLayer {
    type Service = AuditMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuditMiddleware {
            inner,
            recorder: self.recorder.clone(),
            api_prefix: self.api_prefix.clone(),
        }
    }
}

/// Audit middleware service.
#[derive(Clone)]
pub struct AuditMiddleware<S> {
    inner: S,
    recorder: AuditRecorder,
    api_prefix: String,
}

impl<S> Service<Request<Body>> for AuditMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let recorder = self.recorder.clone();
        let api_prefix = self.api_prefix.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let path = req.uri().path().to_string();

            // Paths outside the API prefix are not audited.
            if !path.starts_with(&api_prefix) {
                return inner.call(req).await;
            }

            let method = req.method().clone();
            let ip_address = client_ip(&req);
            let principal = req.extensions().get::<Principal>().cloned();

            // Buffer the request body for methods that carry one. The
            // bytes are replayed into the rebuilt request untouched.
            let (req, request_body) = if has_body(&method) {
                let (parts, body) = req.into_parts();
                match to_bytes(body, usize::MAX).await {
                    Ok(bytes) => {
                        let text = std::str::from_utf8(&bytes)
                            .map(str::to_owned)
                            .unwrap_or_default();
                        (Request::from_parts(parts, Body::from(bytes)), text)
                    }
                    Err(_) => (Request::from_parts(parts, Body::empty()), String::new()),
                }
            } else {
                (req, String::new())
            };

            let response = inner.call(req).await?;

            let status = response.status().as_u16();
            let (parts, body) = response.into_parts();
            let (response, response_body) = match to_bytes(body, usize::MAX).await {
                Ok(bytes) => {
                    let text = std::str::from_utf8(&bytes)
                        .map(str::to_owned)
                        .unwrap_or_default();
                    (Response::from_parts(parts, Body::from(bytes)), text)
                }
                Err(_) => (Response::from_parts(parts, Body::empty()), String::new()),
            };

            // Truncation to the persisted limits happens in the record
            // constructor. A full buffer drops the record, not the call.
            recorder.record(ApiLogRecord::new(
                principal.as_ref(),
                &path,
                method.as_str(),
                status,
                &request_body,
                &response_body,
                ip_address,
            ));

            Ok(response)
        })
    }
}

fn has_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// First forwarded-for entry if present, else the peer address.
fn client_ip(req: &Request<Body>) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|s| s.trim().to_string())
        .or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let req = Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.2")
            .body(Body::empty())
            .unwrap();
        assert_eq!(client_ip(&req), "203.0.113.7");
    }

    #[test]
    fn test_client_ip_falls_back_to_peer() {
        let mut req = Request::builder().body(Body::empty()).unwrap();
        req.extensions_mut()
            .insert(ConnectInfo::<SocketAddr>("192.0.2.4:51111".parse().unwrap()));
        assert_eq!(client_ip(&req), "192.0.2.4");
    }

    #[test]
    fn test_client_ip_unknown() {
        let req = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(client_ip(&req), "unknown");
    }

    #[test]
    fn test_has_body() {
        assert!(has_body(&Method::POST));
        assert!(has_body(&Method::PUT));
        assert!(has_body(&Method::PATCH));
        assert!(!has_body(&Method::GET));
        assert!(!has_body(&Method::DELETE));
    }
}
