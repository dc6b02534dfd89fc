//! Legacy `/api` prefix handling.
//!
//! Older frontend builds call `/api/<route>` and, through a doubled base URL,
//! `/api/api/<route>`. This layer sits in front of the router and rewrites
//! both to `/<route>`, keeping the query string.

use axum::{
    body::Body,
    http::{uri::PathAndQuery, Request, Uri},
    response::Response,
};
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::trace;

const PREFIX: &str = "/api";
const MAX_PREFIXES: usize = 2;

/// Path with up to two leading `/api` segments removed, if any were present.
pub fn strip_api_prefix(path: &str) -> Option<String> {
    let mut rest = path;
    let mut stripped = 0;

    while stripped < MAX_PREFIXES {
        match rest.strip_prefix(PREFIX) {
            Some(tail) if tail.is_empty() || tail.starts_with('/') => {
                rest = tail;
                stripped += 1;
            }
            _ => break,
        }
    }

    if stripped == 0 {
        return None;
    }
    Some(if rest.is_empty() { "/".to_string() } else { rest.to_string() })
}

fn rewrite_uri(uri: &Uri) -> Option<Uri> {
    let path = strip_api_prefix(uri.path())?;
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path,
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}

/// Prefix-stripping layer; a disabled layer forwards requests unchanged
#[derive(Clone, Copy)]
pub struct ApiPrefixLayer {
    enabled: bool,
}

impl ApiPrefixLayer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for ApiPrefixLayer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<S> Layer<S> for ApiPrefixLayer {
    type Service = ApiPrefixService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ApiPrefixService {
            inner,
            enabled: self.enabled,
        }
    }
}

/// Prefix-stripping service
#[derive(Clone)]
pub struct ApiPrefixService<S> {
    inner: S,
    enabled: bool,
}

impl<S> Service<Request<Body>> for ApiPrefixService<S>
where
    S: Service<Request<Body>, Response = Response>,
{
    type Response = Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        if let Some(uri) = self.enabled.then(|| rewrite_uri(req.uri())).flatten() {
            trace!(from = %req.uri(), to = %uri, "stripped api prefix");
            *req.uri_mut() = uri;
        }
        self.inner.call(req)
    }
}
