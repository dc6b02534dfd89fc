//! Liveness endpoints and the unknown-route responder.

use crate::domain::Envelope;
use crate::router::ENDPOINTS;
use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Body of `GET /` and `GET /health`; these carry `status` instead of `success`.
#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<&'static [&'static str]>,
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NotFoundBody {
    success: bool,
    message: String,
    available_endpoints: &'static [&'static str],
}

/// `GET /`
pub async fn root() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        message: "Blockchain File Transfer API is online",
        endpoints: Some(&[
            "/auth/register",
            "/auth/login",
            "/files/sent",
            "/files/received",
        ]),
    })
}

/// `GET /health`
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        message: "API is working",
        endpoints: None,
    })
}

/// `GET /status`
pub async fn status() -> Envelope<StatusBody> {
    Envelope::ok(StatusBody {
        timestamp: Utc::now(),
    })
    .with_message("API server is running")
}

/// Fallback for unknown routes
pub async fn not_found(method: Method, uri: Uri) -> Response {
    debug!(%method, path = %uri.path(), "unknown endpoint");
    let body = NotFoundBody {
        success: false,
        message: format!("Endpoint not found: {} {}", method, uri.path()),
        available_endpoints: ENDPOINTS,
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
