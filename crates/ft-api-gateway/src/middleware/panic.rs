//! Handler panic recovery.

use crate::domain::ApiError;
use axum::{
    body::Body,
    http::Response,
    response::IntoResponse,
};
use std::any::Any;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};
use tracing::error;

/// Renders a caught panic as the standard 500 envelope.
#[derive(Debug, Clone, Copy)]
pub struct PanicResponder {
    expose_detail: bool,
}

impl PanicResponder {
    pub fn new(expose_detail: bool) -> Self {
        Self { expose_detail }
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        let detail = panic_message(err.as_ref());
        error!(panic = %detail, "handler panicked");
        ApiError::internal(detail, self.expose_detail).into_response()
    }
}

/// Panic catcher for the router
pub fn create_panic_layer(expose_detail: bool) -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder::new(expose_detail))
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
