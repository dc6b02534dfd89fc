//! Success envelope shared by all handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// `{success, message?, blockchainAddress?, ...body}`
///
/// `body` is flattened into the top level, so it must serialize as a map
/// (a struct, a map, or `()` for no extra fields). A `blockchainAddress` left
/// unset here is filled in by the response normalizer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain_address: Option<String>,
    #[serde(flatten)]
    pub body: T,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> Envelope<T> {
    /// 200 with `success: true`
    pub fn ok(body: T) -> Self {
        Self {
            success: true,
            message: None,
            blockchain_address: None,
            body,
            status: StatusCode::OK,
        }
    }

    /// 201 with `success: true`
    pub fn created(body: T) -> Self {
        Self::ok(body).with_status(StatusCode::CREATED)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.blockchain_address = Some(address.into());
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}
