//! Outbound response normalization.
//!
//! Every response the router produces passes through here on its way out.
//! Bodies of known, bounded size are buffered and handed to
//! [`FieldNormalizer`]; anything else (streams, empty bodies, oversized
//! payloads) goes out untouched. The content type is not consulted, so a
//! handler that writes JSON as plain text is normalized too.

use crate::domain::error::INTERNAL_ERROR_MESSAGE;
use crate::domain::{FieldNormalizer, NormalizeError};
use axum::{
    body::{to_bytes, Body, HttpBody},
    http::{header::CONTENT_LENGTH, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use shared_identifiers::random_address;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::{debug, error, warn};

/// Normalizer layer configuration
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    /// Largest body that will be buffered
    pub max_body_size: usize,
    /// Include failure detail in 500 responses
    pub expose_errors: bool,
}

/// Response normalizer layer
#[derive(Clone)]
pub struct NormalizeLayer {
    normalizer: Arc<FieldNormalizer>,
    config: Arc<NormalizeConfig>,
}

impl NormalizeLayer {
    pub fn new(normalizer: FieldNormalizer, config: NormalizeConfig) -> Self {
        Self {
            normalizer: Arc::new(normalizer),
            config: Arc::new(config),
        }
    }
}

impl<S> Layer<S> for NormalizeLayer {
    type Service = NormalizeService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        NormalizeService {
            inner,
            normalizer: Arc::clone(&self.normalizer),
            config: Arc::clone(&self.config),
        }
    }
}

/// Response normalizer service
#[derive(Clone)]
pub struct NormalizeService<S> {
    inner: S,
    normalizer: Arc<FieldNormalizer>,
    config: Arc<NormalizeConfig>,
}

impl<S> Service<Request<Body>> for NormalizeService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let normalizer = Arc::clone(&self.normalizer);
        let config = Arc::clone(&self.config);

        Box::pin(async move {
            let response = inner.call(req).await?;
            Ok(normalize_response(&normalizer, &config, response).await)
        })
    }
}

/// What to do with a response body of a given declared size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyPlan {
    /// Empty, unsized, or normalization switched off (zero bound)
    Skip,
    /// Over the bound; leaves without the field
    TooLarge(u64),
    Buffer,
}

fn plan_for(upper: Option<u64>, max: usize) -> BodyPlan {
    match upper {
        Some(0) | None => BodyPlan::Skip,
        Some(_) if max == 0 => BodyPlan::Skip,
        Some(len) if len > max as u64 => BodyPlan::TooLarge(len),
        Some(_) => BodyPlan::Buffer,
    }
}

/// Normalize one response. Never fails; internal failures become a 500.
pub async fn normalize_response(
    normalizer: &FieldNormalizer,
    config: &NormalizeConfig,
    response: Response,
) -> Response {
    match plan_for(response.body().size_hint().upper(), config.max_body_size) {
        BodyPlan::Skip => return response,
        BodyPlan::TooLarge(len) => {
            warn!(
                len,
                max = config.max_body_size,
                "response too large to normalize, sent without address field"
            );
            return response;
        }
        BodyPlan::Buffer => {}
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, config.max_body_size).await {
        Ok(bytes) => bytes,
        Err(err) => {
            let err = NormalizeError::ReadBody(err.to_string());
            error!(error = %err, "response normalization failed");
            return failure_response(normalizer, config, &err);
        }
    };

    match normalizer.apply_bytes(&bytes, random_address) {
        Ok(None) => Response::from_parts(parts, Body::from(bytes)),
        Ok(Some(rewritten)) => {
            debug!(status = parts.status.as_u16(), "response normalized");
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(rewritten))
        }
        Err(err) => {
            error!(error = %err, "response normalization failed");
            failure_response(normalizer, config, &err)
        }
    }
}

/// 500 envelope built directly, already carrying the normalized field.
fn failure_response(
    normalizer: &FieldNormalizer,
    config: &NormalizeConfig,
    err: &NormalizeError,
) -> Response {
    let mut body = serde_json::json!({
        "success": false,
        "message": INTERNAL_ERROR_MESSAGE,
    });
    if config.expose_errors {
        body["error"] = serde_json::Value::String(err.to_string());
    }
    normalizer.apply(&mut body, random_address);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
