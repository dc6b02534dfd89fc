//! Gateway error types.
//!
//! [`ApiError`] is what handlers return and what clients see. The remaining
//! enums describe internal failures and are mapped onto an `ApiError` (or a
//! startup failure) at the boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

/// Message used for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// HTTP-facing error, rendered as `{success:false, message, error?}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status
    pub status: StatusCode,
    /// Human readable message
    pub message: String,
    /// Underlying failure, only set when it may be shown to the client
    pub detail: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            detail: None,
        }
    }

    /// 400 - missing or invalid input
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 401 - missing, malformed or unknown credentials
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// 404 - unknown user or file
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 413 - request body over the configured limit
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, message)
    }

    /// 500 - `detail` is kept only when `expose` is set (development mode)
    pub fn internal(detail: impl Into<String>, expose: bool) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            detail: expose.then(|| detail.into()),
        }
    }

    /// Whether this is a server-side failure
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            message: &self.message,
            error: self.detail.as_deref(),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway startup and serving errors
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Server(#[source] std::io::Error),

    #[error("service already started")]
    AlreadyStarted,

    #[error("failed to seed demo data: {0}")]
    Seed(#[from] RepositoryError),
}

/// Storage failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// A unique field already holds this value
    #[error("{field} '{value}' already exists")]
    Conflict { field: String, value: String },

    /// The backing store failed
    #[error("repository backend failure: {0}")]
    Backend(String),
}

/// Response normalization failures
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("failed to read response body: {0}")]
    ReadBody(String),

    #[error("failed to serialize normalized body: {0}")]
    Serialize(#[from] serde_json::Error),
}
