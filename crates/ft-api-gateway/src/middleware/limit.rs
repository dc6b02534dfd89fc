//! Request body size limit.
//!
//! Rejects bodies larger than `max_request_size` with a 413 envelope. The
//! declared `Content-Length` is checked first; bodies that carry data are
//! then buffered up to the limit.

use crate::domain::{ApiError, LimitsConfig};
use axum::{
    body::{to_bytes, Body, HttpBody},
    http::{header::CONTENT_LENGTH, Request},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower::{Layer, Service};
use tracing::warn;

/// Request size limit layer
#[derive(Clone)]
pub struct RequestLimitLayer {
    config: Arc<LimitsConfig>,
}

impl RequestLimitLayer {
    pub fn new(config: LimitsConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl<S> Layer<S> for RequestLimitLayer {
    type Service = RequestLimitService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLimitService {
            inner,
            config: Arc::clone(&self.config),
        }
    }
}

/// Request size limit service
#[derive(Clone)]
pub struct RequestLimitService<S> {
    inner: S,
    config: Arc<LimitsConfig>,
}

impl<S> Service<Request<Body>> for RequestLimitService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let max = self.config.max_request_size;
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            if let Some(len) = declared_length(&req) {
                if len > max {
                    warn!(size = len, max, "request too large (from header)");
                    return Ok(too_large(len, max));
                }
            }

            // Nothing to buffer
            if req.body().is_end_stream() {
                return inner.call(req).await;
            }

            let (parts, body) = req.into_parts();
            let bytes = match to_bytes(body, max).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(error = %e, max, "failed to read request body");
                    return Ok(ApiError::payload_too_large(format!(
                        "Request body exceeds limit {}",
                        max
                    ))
                    .into_response());
                }
            };

            inner.call(Request::from_parts(parts, Body::from(bytes))).await
        })
    }
}

fn declared_length<B>(req: &Request<B>) -> Option<usize> {
    req.headers()
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

fn too_large(len: usize, max: usize) -> Response {
    ApiError::payload_too_large(format!("Request size {} exceeds limit {}", len, max))
        .into_response()
}
